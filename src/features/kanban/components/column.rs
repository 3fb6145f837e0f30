use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element};
use crate::core::models::Categoria;
use crate::features::kanban::hooks::ControllerHandle;
use crate::features::kanban::state::ColumnCards;
use super::ClientCard;

const COLUMN_CLASS: &str = "kanban-column flex-shrink-0 w-80 p-4 rounded-xl shadow-lg border-t-4";

/// Stage of the nearest `.kanban-column` around the event target.
fn target_column(ev: &DragEvent) -> Option<Categoria> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let column = target.closest(".kanban-column").ok()??;
    let id = column.get_attribute("data-category")?;
    Categoria::from_id(&id)
}

#[component]
pub fn KanbanColumn(controller: ControllerHandle, column: ColumnCards) -> impl IntoView {
    let categoria = column.categoria;
    let state = controller.with_value(|c| *c.store());

    let column_class = move || {
        let base = format!("{} {}", COLUMN_CLASS, categoria.column_class());
        if state.with(|s| s.is_highlighted(categoria)) {
            format!("{} drag-over", base)
        } else {
            base
        }
    };

    let on_dragover = move |ev: DragEvent| {
        // Required for the element to accept a drop
        ev.prevent_default();
        if let Some(data) = ev.data_transfer() {
            data.set_drop_effect("move");
        }
        controller.with_value(|c| c.on_drag_over(target_column(&ev)));
    };

    let on_dragleave = move |ev: DragEvent| {
        controller.with_value(|c| c.on_drag_leave(target_column(&ev)));
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let change = controller.with_value(|c| c.on_drop(target_column(&ev), &ev.data_transfer()));
        if let Some(change) = change {
            let controller = controller.get_value();
            spawn_local(async move {
                controller.apply_category_change(change).await;
            });
        }
    };

    let count = column.count;
    let cards = column
        .cards
        .into_iter()
        .map(|cliente| view! { <ClientCard controller=controller cliente=cliente /> })
        .collect_view();

    view! {
        <div
            class=column_class
            data-category=categoria.as_str()
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <h3 class="text-xl font-bold mb-4 flex justify-between items-center text-gray-800">
                {categoria.title()}
                <span class="column-count text-sm font-medium bg-white rounded-full px-3 py-1 shadow-inner">
                    {count}
                </span>
            </h3>
            <div class="card-list space-y-3 min-h-[50px]">{cards}</div>
        </div>
    }
}
