//! Everything the board view renders from, in one place: the latest snapshot,
//! the card being dragged, highlighted drop targets and the detail modal.

pub mod board;
pub mod modal;

use std::collections::BTreeSet;
use crate::core::models::{Categoria, ClientPatch, Cliente};

pub use board::{Board, ColumnCards};
pub use modal::{parse_recuperacao, ModalPhase, ModalSession, ModalState};

/// Card being relocated; lives from `dragstart` until `drop` or `dragend`.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSubject {
    pub client_id: String,
    /// Faded look, applied one tick after `dragstart`.
    pub dragging: bool,
}

/// Category update produced by a drop on a column.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChange {
    pub client_id: String,
    pub categoria: Categoria,
}

/// Details update produced by saving the modal.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsUpdate {
    pub client_id: String,
    pub patch: ClientPatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    board: Board,
    /// Bumped whenever `board` changes; views key redraws on it.
    board_version: u64,
    drag: Option<DragSubject>,
    highlighted: BTreeSet<Categoria>,
    modal: ModalState,
    modal_generation: u64,
}

impl UiState {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_version(&self) -> u64 {
        self.board_version
    }

    pub fn drag_subject(&self) -> Option<&DragSubject> {
        self.drag.as_ref()
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Replace the whole snapshot.
    pub fn render_board(&mut self, clients: Vec<Cliente>) {
        self.board = Board::render(clients);
        self.board_version += 1;
    }

    pub fn is_highlighted(&self, categoria: Categoria) -> bool {
        self.highlighted.contains(&categoria)
    }

    pub fn is_dragging(&self, client_id: &str) -> bool {
        self.drag
            .as_ref()
            .map(|d| d.dragging && d.client_id == client_id)
            .unwrap_or(false)
    }

    pub fn start_drag(&mut self, client_id: &str) {
        self.drag = Some(DragSubject {
            client_id: client_id.to_string(),
            dragging: false,
        });
    }

    pub fn mark_dragging(&mut self, client_id: &str) {
        if let Some(subject) = self.drag.as_mut() {
            if subject.client_id == client_id {
                subject.dragging = true;
            }
        }
    }

    pub fn drag_over(&mut self, column: Option<Categoria>) {
        if let Some(categoria) = column {
            self.highlighted.insert(categoria);
        }
    }

    pub fn drag_leave(&mut self, column: Option<Categoria>) {
        if let Some(categoria) = column {
            self.highlighted.remove(&categoria);
        }
    }

    /// Finish a drag over `column`. The subject is cleared whatever happens;
    /// a change is produced only when there was a subject and a target column.
    pub fn drop_on(&mut self, column: Option<Categoria>, payload_id: Option<String>) -> Option<CategoryChange> {
        if let Some(categoria) = column {
            self.highlighted.remove(&categoria);
        }

        let subject = self.drag.take()?;
        let categoria = column?;

        if self.board.move_card(&subject.client_id, categoria) {
            self.board_version += 1;
        }
        let client_id = payload_id
            .filter(|id| !id.is_empty())
            .unwrap_or(subject.client_id);

        Some(CategoryChange { client_id, categoria })
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
        self.highlighted.clear();
    }

    /// Bind `cliente` to the modal and return the session generation.
    pub fn open_modal(&mut self, cliente: Cliente) -> u64 {
        self.modal_generation += 1;
        self.modal.open(cliente, self.modal_generation);
        self.modal_generation
    }

    pub fn show_modal(&mut self, generation: u64) {
        self.modal.mark_shown(generation);
    }

    pub fn set_recuperacao(&mut self, value: i64) {
        if let Some(session) = self.modal.session_mut() {
            session.recuperacao = value;
        }
    }

    pub fn set_qualidade(&mut self, value: String) {
        if let Some(session) = self.modal.session_mut() {
            session.qualidade = value;
        }
    }

    pub fn set_recorrencia(&mut self, value: String) {
        if let Some(session) = self.modal.session_mut() {
            session.recorrencia = value;
        }
    }

    /// Current control values as an update, `None` when nothing is bound.
    pub fn pending_details(&self) -> Option<DetailsUpdate> {
        self.modal.session().map(|session| DetailsUpdate {
            client_id: session.cliente.id.clone(),
            patch: session.patch(),
        })
    }

    pub fn begin_modal_close(&mut self) -> Option<u64> {
        self.modal.begin_close()
    }

    pub fn finish_modal_close(&mut self, generation: u64) {
        self.modal.finish_close(generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::kanban::testing::cliente;

    fn state_with(clients: Vec<Cliente>) -> UiState {
        let mut state = UiState::default();
        state.render_board(clients);
        state
    }

    #[test]
    fn hover_highlights_and_leave_clears() {
        let mut state = UiState::default();
        state.drag_over(Some(Categoria::MidTouch));
        state.drag_over(None);
        assert!(state.is_highlighted(Categoria::MidTouch));

        state.drag_leave(Some(Categoria::MidTouch));
        assert!(!state.is_highlighted(Categoria::MidTouch));
    }

    #[test]
    fn board_version_tracks_snapshot_changes_only() {
        let mut state = UiState::default();
        assert_eq!(state.board_version(), 0);

        state.render_board(vec![cliente("a", "High Touch"), cliente("b", "Mid Touch")]);
        assert_eq!(state.board_version(), 1);

        state.start_drag("a");
        state.mark_dragging("a");
        state.drag_over(Some(Categoria::TechTouch));
        state.drag_leave(Some(Categoria::TechTouch));
        let generation = state.open_modal(cliente("b", "Mid Touch"));
        state.show_modal(generation);
        state.set_recuperacao(70);
        state.set_qualidade("Alta".to_string());
        assert_eq!(state.board_version(), 1);

        state.drop_on(Some(Categoria::TechTouch), None);
        assert_eq!(state.board_version(), 2);

        state.start_drag("ghost");
        state.drop_on(Some(Categoria::HighTouch), None);
        assert_eq!(state.board_version(), 2);
    }

    #[test]
    fn dragging_flag_applies_to_current_subject_only() {
        let mut state = state_with(vec![cliente("a", "High Touch")]);
        state.start_drag("a");
        assert!(!state.is_dragging("a"));

        state.mark_dragging("b");
        assert!(!state.is_dragging("a"));

        state.mark_dragging("a");
        assert!(state.is_dragging("a"));
    }

    #[test]
    fn drop_on_column_moves_card_and_yields_change() {
        let mut state = state_with(vec![cliente("a", "High Touch")]);
        state.start_drag("a");
        state.drag_over(Some(Categoria::TechTouch));

        let change = state.drop_on(Some(Categoria::TechTouch), Some("a".to_string()));

        assert_eq!(
            change,
            Some(CategoryChange { client_id: "a".to_string(), categoria: Categoria::TechTouch })
        );
        assert!(state.drag_subject().is_none());
        assert!(!state.is_highlighted(Categoria::TechTouch));
        let tech = state.board().column(Categoria::TechTouch).unwrap();
        assert_eq!(tech.cards[0].id, "a");
    }

    #[test]
    fn drop_prefers_payload_id_and_falls_back_to_subject() {
        let mut state = state_with(vec![cliente("a", "High Touch")]);
        state.start_drag("a");
        let change = state.drop_on(Some(Categoria::MidTouch), Some("server-id".to_string())).unwrap();
        assert_eq!(change.client_id, "server-id");

        state.start_drag("a");
        let change = state.drop_on(Some(Categoria::MidTouch), Some(String::new())).unwrap();
        assert_eq!(change.client_id, "a");
    }

    #[test]
    fn drop_outside_columns_clears_subject_without_change() {
        let mut state = state_with(vec![cliente("a", "High Touch")]);
        let before = state.board().clone();
        state.start_drag("a");

        assert_eq!(state.drop_on(None, Some("a".to_string())), None);
        assert!(state.drag_subject().is_none());
        assert_eq!(state.board(), &before);
    }

    #[test]
    fn drop_without_subject_is_ignored() {
        let mut state = state_with(vec![cliente("a", "High Touch")]);
        assert_eq!(state.drop_on(Some(Categoria::MidTouch), Some("a".to_string())), None);
        assert_eq!(state.board().column(Categoria::HighTouch).unwrap().cards.len(), 1);
    }

    #[test]
    fn end_drag_resets_leftovers() {
        let mut state = state_with(vec![cliente("a", "High Touch")]);
        state.start_drag("a");
        state.mark_dragging("a");
        state.drag_over(Some(Categoria::HighTouch));

        state.end_drag();

        assert!(state.drag_subject().is_none());
        assert!(!state.is_dragging("a"));
        assert!(!state.is_highlighted(Categoria::HighTouch));
    }

    #[test]
    fn pending_details_reflect_edited_controls() {
        let mut state = UiState::default();
        assert_eq!(state.pending_details(), None);

        state.open_modal(cliente("a", "High Touch"));
        state.set_recuperacao(50);
        state.set_qualidade("Alta".to_string());
        state.set_recorrencia("Mensal".to_string());

        let update = state.pending_details().unwrap();
        assert_eq!(update.client_id, "a");
        assert_eq!(update.patch, ClientPatch::details(50, "Alta".to_string(), "Mensal".to_string()));
    }

    #[test]
    fn reopening_binds_a_single_record() {
        let mut state = UiState::default();
        let first = state.open_modal(cliente("a", "High Touch"));
        let second = state.open_modal(cliente("b", "Mid Touch"));

        assert_ne!(first, second);
        assert_eq!(state.modal().session().unwrap().cliente.id, "b");
    }
}
