use crate::core::models::{ClientPatch, Cliente};

pub const RECUPERACAO_MIN: i64 = 0;
pub const RECUPERACAO_MAX: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// Visible, entry transition not started yet.
    Entering,
    Shown,
    /// Exit transition running; hidden once the close delay elapses.
    Closing,
}

/// Editing session bound to one client.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSession {
    pub cliente: Cliente,
    pub recuperacao: i64,
    pub qualidade: String,
    pub recorrencia: String,
    pub phase: ModalPhase,
    pub generation: u64,
}

impl ModalSession {
    fn new(cliente: Cliente, generation: u64) -> Self {
        Self {
            recuperacao: cliente.recuperacao.clamp(RECUPERACAO_MIN, RECUPERACAO_MAX),
            qualidade: cliente.qualidade.clone(),
            recorrencia: cliente.recorrencia.clone(),
            cliente,
            phase: ModalPhase::Entering,
            generation,
        }
    }

    pub fn patch(&self) -> ClientPatch {
        ClientPatch::details(self.recuperacao, self.qualidade.clone(), self.recorrencia.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalSession),
}

impl ModalState {
    pub fn session(&self) -> Option<&ModalSession> {
        match self {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut ModalSession> {
        match self {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn phase(&self) -> Option<ModalPhase> {
        self.session().map(|s| s.phase)
    }

    /// Bind `cliente`, replacing any previous session.
    pub fn open(&mut self, cliente: Cliente, generation: u64) {
        *self = ModalState::Open(ModalSession::new(cliente, generation));
    }

    pub fn mark_shown(&mut self, generation: u64) {
        if let Some(session) = self.session_mut() {
            if session.generation == generation && session.phase == ModalPhase::Entering {
                session.phase = ModalPhase::Shown;
            }
        }
    }

    /// Start the exit transition. Returns the generation to hand to `finish_close`.
    pub fn begin_close(&mut self) -> Option<u64> {
        let session = self.session_mut()?;
        session.phase = ModalPhase::Closing;
        Some(session.generation)
    }

    /// Hide the modal and drop the record, unless another client was opened meanwhile.
    pub fn finish_close(&mut self, generation: u64) {
        let stale = self
            .session()
            .map(|s| s.generation != generation || s.phase != ModalPhase::Closing)
            .unwrap_or(true);
        if !stale {
            *self = ModalState::Closed;
        }
    }
}

/// Slider values arrive as strings from the input element.
pub fn parse_recuperacao(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .map(|v| v.clamp(RECUPERACAO_MIN, RECUPERACAO_MAX))
}
