use leptos::prelude::*;
use crate::features::kanban::{use_board, ClientModal, KanbanBoard, KanbanHeader};

#[component]
pub fn Kanban() -> impl IntoView {
    let board = use_board();
    let state = board.state;
    let total = Memo::new(move |_| state.with(|s| s.board().card_count()));

    view! {
        <div class="kanban-page min-h-screen bg-gray-100">
            <KanbanHeader controller=board.controller total=total />
            <KanbanBoard controller=board.controller />
            <ClientModal controller=board.controller />
        </div>
    }
}
