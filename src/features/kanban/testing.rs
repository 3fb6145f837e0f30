//! In-memory stand-ins for the backend, the browser and the drag data store.

use std::cell::{Cell, RefCell};
use crate::core::config::AppConfig;
use crate::core::models::{ClientPatch, Cliente, UploadFile};
use crate::core::services::{ApiError, ClientesApi, DragPayload, UiHost, EXPORT_PATH};
use crate::features::kanban::services::BoardController;
use crate::features::kanban::state::UiState;

pub type TestController = BoardController<FakeApi, RecordingHost, RefCell<UiState>>;

pub fn cliente(id: &str, categoria: &str) -> Cliente {
    Cliente {
        id: id.to_string(),
        nome: format!("Cliente {}", id),
        logo: None,
        media_envio: 100.0,
        categoria: categoria.to_string(),
        recuperacao: 0,
        qualidade: "Média".to_string(),
        recorrencia: "Sem fluxo definido".to_string(),
    }
}

pub fn controller(clients: Vec<Cliente>) -> TestController {
    let config = AppConfig::default();
    BoardController::new(
        FakeApi::new(clients, &config.api_base_url),
        RecordingHost::default(),
        RefCell::new(UiState::default()),
        config,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Update { id: String, body: serde_json::Value },
    Upload { name: String },
}

/// Backend double: records calls and applies patches to its own client list.
pub struct FakeApi {
    base_url: String,
    clients: RefCell<Vec<Cliente>>,
    calls: RefCell<Vec<ApiCall>>,
    fail_list: Cell<bool>,
    fail_update: Cell<bool>,
    upload_reply: RefCell<Result<String, ApiError>>,
}

impl FakeApi {
    pub fn new(clients: Vec<Cliente>, base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            clients: RefCell::new(clients),
            calls: RefCell::new(Vec::new()),
            fail_list: Cell::new(false),
            fail_update: Cell::new(false),
            upload_reply: RefCell::new(Ok(String::new())),
        }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.set(fail);
    }

    pub fn fail_update(&self, fail: bool) {
        self.fail_update.set(fail);
    }

    pub fn set_upload_reply(&self, reply: Result<String, ApiError>) {
        *self.upload_reply.borrow_mut() = reply;
    }

    pub fn client(&self, id: &str) -> Option<Cliente> {
        self.clients.borrow().iter().find(|c| c.id == id).cloned()
    }
}

impl ClientesApi for FakeApi {
    async fn list_clients(&self) -> Result<Vec<Cliente>, ApiError> {
        self.calls.borrow_mut().push(ApiCall::List);
        if self.fail_list.get() {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(self.clients.borrow().clone())
    }

    async fn update_client(&self, client_id: &str, patch: &ClientPatch) -> Result<(), ApiError> {
        let body = serde_json::to_value(patch).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.calls.borrow_mut().push(ApiCall::Update { id: client_id.to_string(), body });
        if self.fail_update.get() {
            return Err(ApiError::Status { status: 500, message: "Erro ao atualizar cliente".to_string() });
        }

        let mut clients = self.clients.borrow_mut();
        let Some(cliente) = clients.iter_mut().find(|c| c.id == client_id) else {
            return Err(ApiError::Status { status: 404, message: "Cliente não encontrado".to_string() });
        };
        if let Some(categoria) = patch.categoria {
            cliente.categoria = categoria.as_str().to_string();
        }
        if let Some(recuperacao) = patch.recuperacao {
            cliente.recuperacao = recuperacao;
        }
        if let Some(qualidade) = &patch.qualidade {
            cliente.qualidade = qualidade.clone();
        }
        if let Some(recorrencia) = &patch.recorrencia {
            cliente.recorrencia = recorrencia.clone();
        }
        Ok(())
    }

    async fn upload_spreadsheet(&self, file: UploadFile) -> Result<String, ApiError> {
        self.calls.borrow_mut().push(ApiCall::Upload { name: file.name });
        self.upload_reply.borrow().clone()
    }

    fn export_url(&self) -> String {
        format!("{}{}", self.base_url, EXPORT_PATH)
    }
}

/// Browser double: remembers alerts, console errors, navigations and timer requests.
#[derive(Debug, Default)]
pub struct RecordingHost {
    alerts: RefCell<Vec<String>>,
    infos: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
    delays: RefCell<Vec<u32>>,
}

impl RecordingHost {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.delays.borrow().clone()
    }
}

impl UiHost for RecordingHost {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn log_info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn log_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }

    async fn delay(&self, ms: u32) {
        self.delays.borrow_mut().push(ms);
    }
}

/// Drag data store that survives between the synthetic start and drop events.
#[derive(Debug, Default)]
pub struct MemoryPayload {
    data: RefCell<Option<String>>,
}

impl DragPayload for MemoryPayload {
    fn set_client_id(&self, client_id: &str) {
        *self.data.borrow_mut() = Some(client_id.to_string());
    }

    fn client_id(&self) -> Option<String> {
        self.data.borrow().clone().filter(|id| !id.is_empty())
    }
}
