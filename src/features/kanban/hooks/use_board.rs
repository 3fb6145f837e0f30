use std::rc::Rc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::config::AppConfig;
use crate::core::services::{BrowserHost, HttpClientesApi};
use crate::features::kanban::services::BoardController;
use crate::features::kanban::state::UiState;

pub type KanbanController = BoardController<HttpClientesApi, BrowserHost, RwSignal<UiState>>;

/// Copyable handle views capture; reactive closures must stay `Send`, the controller is not.
pub type ControllerHandle = StoredValue<Rc<KanbanController>, LocalStorage>;

pub struct BoardHook {
    pub state: RwSignal<UiState>,
    pub controller: ControllerHandle,
}

pub fn use_board() -> BoardHook {
    let config = AppConfig::from_browser();
    let state = RwSignal::new(UiState::default());
    let controller = Rc::new(BoardController::new(
        HttpClientesApi::new(&config),
        BrowserHost,
        state,
        config,
    ));

    // Load clients on mount
    {
        let controller = controller.clone();
        spawn_local(async move {
            controller.refresh().await;
        });
    }

    BoardHook {
        state,
        controller: StoredValue::new_local(controller),
    }
}
