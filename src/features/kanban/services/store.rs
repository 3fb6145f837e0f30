use std::cell::RefCell;
use leptos::prelude::*;
use crate::features::kanban::state::UiState;

/// Where the controller keeps `UiState`. The browser uses a signal so views
/// re-render; tests use a plain `RefCell`.
pub trait BoardStore {
    /// `None` when the store is gone (signal disposed with its owner).
    fn modify<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> Option<R>;

    fn inspect<R>(&self, f: impl FnOnce(&UiState) -> R) -> Option<R>;
}

impl BoardStore for RwSignal<UiState> {
    fn modify<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&UiState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl BoardStore for RefCell<UiState> {
    fn modify<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&UiState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
