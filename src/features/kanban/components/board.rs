use leptos::prelude::*;
use crate::features::kanban::hooks::ControllerHandle;
use super::KanbanColumn;

#[component]
pub fn KanbanBoard(controller: ControllerHandle) -> impl IntoView {
    let state = controller.with_value(|c| *c.store());
    // Redraw only when the snapshot changes, not on drag or modal updates
    let version = Memo::new(move |_| state.with(|s| s.board_version()));

    view! {
        <div id="kanban-board" class="kanban-board">
            {move || {
                version.track();
                state
                    .with_untracked(|s| s.board().columns().to_vec())
                    .into_iter()
                    .map(|column| view! { <KanbanColumn controller=controller column=column /> })
                    .collect_view()
            }}
        </div>
    }
}
