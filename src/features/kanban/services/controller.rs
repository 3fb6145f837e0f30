use crate::core::config::AppConfig;
use crate::core::models::{Categoria, ClientPatch, Cliente, UploadFile};
use crate::core::services::{ApiError, ClientesApi, DragPayload, UiHost};
use crate::features::kanban::state::{parse_recuperacao, CategoryChange, DetailsUpdate};
use super::store::BoardStore;

pub const LOAD_FAILED: &str = "Erro ao carregar os dados. Verifique a conexão com o servidor.";
pub const MOVE_FAILED: &str = "Erro ao mover o card. Tente novamente.";
pub const DETAILS_SAVED: &str = "Detalhes do cliente salvos com sucesso!";
pub const DETAILS_FAILED: &str = "Erro ao salvar os detalhes do cliente. Tente novamente.";
pub const UPLOAD_FAILED: &str = "Erro ao tentar fazer o upload da planilha.";

/// Handlers for every board interaction. Views translate DOM events into
/// these calls; tests call them directly with fakes.
///
/// Handlers that must read event data synchronously (`on_drag_start`,
/// `on_drop`) are plain methods; anything touching the network is async and
/// runs on `spawn_local` in the browser.
pub struct BoardController<A, H, S> {
    api: A,
    host: H,
    store: S,
    config: AppConfig,
}

impl<A, H, S> BoardController<A, H, S>
where
    A: ClientesApi,
    H: UiHost,
    S: BoardStore,
{
    pub fn new(api: A, host: H, store: S, config: AppConfig) -> Self {
        Self { api, host, store, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Refetch the whole client list and redraw the board from it.
    /// The board is left as it was when the fetch fails.
    pub async fn refresh(&self) -> bool {
        match self.api.list_clients().await {
            Ok(clients) => {
                self.host.log_info(&format!("Loaded {} clients", clients.len()));
                self.store.modify(|s| s.render_board(clients));
                true
            }
            Err(e) => {
                self.host.log_error(&format!("Failed to load board: {}", e));
                self.host.alert(LOAD_FAILED);
                false
            }
        }
    }

    // --- drag and drop ---

    pub fn on_drag_start(&self, client_id: &str, payload: &impl DragPayload) {
        payload.set_client_id(client_id);
        self.store.modify(|s| s.start_drag(client_id));
    }

    /// Fade the dragged card one tick later so the drag image is captured unfaded.
    pub async fn settle_drag_start(&self, client_id: &str) {
        self.host.delay(0).await;
        self.store.modify(|s| s.mark_dragging(client_id));
    }

    pub fn on_drag_over(&self, column: Option<Categoria>) {
        let already = self
            .store
            .inspect(|s| column.map(|c| s.is_highlighted(c)).unwrap_or(true))
            .unwrap_or(true);
        // dragover fires continuously; only write when the highlight changes
        if !already {
            self.store.modify(|s| s.drag_over(column));
        }
    }

    pub fn on_drag_leave(&self, column: Option<Categoria>) {
        self.store.modify(|s| s.drag_leave(column));
    }

    pub fn on_drag_end(&self) {
        let dirty = self
            .store
            .inspect(|s| s.drag_subject().is_some() || Categoria::all().into_iter().any(|c| s.is_highlighted(c)))
            .unwrap_or(false);
        if dirty {
            self.store.modify(|s| s.end_drag());
        }
    }

    /// Move the dragged card into `column` and return the update to send.
    pub fn on_drop(&self, column: Option<Categoria>, payload: &impl DragPayload) -> Option<CategoryChange> {
        let payload_id = payload.client_id();
        let change = self.store.modify(|s| s.drop_on(column, payload_id)).flatten();
        if change.is_none() {
            self.host.log_info("Drop ignored: no drag subject or target column");
        }
        change
    }

    pub async fn apply_category_change(&self, change: CategoryChange) {
        let patch = ClientPatch::categoria(change.categoria);
        match self.api.update_client(&change.client_id, &patch).await {
            Ok(()) => {
                self.host.log_info(&format!(
                    "Client {} moved to {}",
                    change.client_id,
                    change.categoria.as_str()
                ));
                self.refresh().await;
            }
            Err(e) => {
                self.host.log_error(&format!("Failed to update client {}: {}", change.client_id, e));
                self.host.alert(MOVE_FAILED);
            }
        }
    }

    // --- detail modal ---

    pub async fn on_card_click(&self, cliente: Cliente) {
        let Some(generation) = self.store.modify(|s| s.open_modal(cliente)) else {
            return;
        };
        self.host.delay(0).await;
        self.store.modify(|s| s.show_modal(generation));
    }

    pub fn on_slider_input(&self, raw: &str) {
        if let Some(value) = parse_recuperacao(raw) {
            self.store.modify(|s| s.set_recuperacao(value));
        }
    }

    pub fn on_qualidade_change(&self, value: String) {
        self.store.modify(|s| s.set_qualidade(value));
    }

    pub fn on_recorrencia_change(&self, value: String) {
        self.store.modify(|s| s.set_recorrencia(value));
    }

    /// Persist the modal's control values, then close it. No-op when nothing is bound.
    pub async fn on_modal_save(&self) {
        let Some(update) = self.store.inspect(|s| s.pending_details()).flatten() else {
            return;
        };
        self.save_details(update).await;
        self.on_modal_close().await;
    }

    async fn save_details(&self, update: DetailsUpdate) {
        match self.api.update_client(&update.client_id, &update.patch).await {
            Ok(()) => {
                self.host.alert(DETAILS_SAVED);
                self.refresh().await;
            }
            Err(e) => {
                self.host.log_error(&format!("Failed to save details for {}: {}", update.client_id, e));
                self.host.alert(DETAILS_FAILED);
            }
        }
    }

    pub async fn on_modal_close(&self) {
        let Some(generation) = self.store.modify(|s| s.begin_modal_close()).flatten() else {
            return;
        };
        self.host.delay(self.config.modal_close_delay_ms).await;
        self.store.modify(|s| s.finish_modal_close(generation));
    }

    /// Clicks inside the panel bubble up to the backdrop; only the backdrop itself closes.
    pub async fn on_backdrop_click(&self, target_is_backdrop: bool) {
        if target_is_backdrop {
            self.on_modal_close().await;
        }
    }

    // --- upload and export ---

    pub async fn on_file_selected(&self, selected: Result<Option<UploadFile>, ApiError>) {
        let file = match selected {
            Ok(Some(file)) => file,
            Ok(None) => return,
            Err(e) => {
                self.host.log_error(&format!("Upload failed: {}", e));
                self.host.alert(UPLOAD_FAILED);
                return;
            }
        };

        let file_name = file.name.clone();
        match self.api.upload_spreadsheet(file).await {
            Ok(message) => {
                self.host.log_info(&format!("Uploaded {}", file_name));
                self.host.alert(&format!("Upload bem-sucedido! {}", message));
                self.refresh().await;
            }
            Err(e) => {
                self.host.log_error(&format!("Upload of {} failed: {}", file_name, e));
                let message = match &e {
                    ApiError::Status { status, .. } => match e.server_message() {
                        Some(text) => format!("Erro no upload: {}", text),
                        None => format!("Erro no upload: HTTP {}", status),
                    },
                    _ => UPLOAD_FAILED.to_string(),
                };
                self.host.alert(&message);
            }
        }
    }

    pub fn on_export(&self) {
        let url = self.api.export_url();
        self.host.log_info(&format!("Exporting clients from {}", url));
        self.host.navigate(&url);
    }
}
