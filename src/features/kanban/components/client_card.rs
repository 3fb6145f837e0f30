use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::DragEvent;
use crate::core::models::Cliente;
use crate::features::kanban::hooks::ControllerHandle;

const CARD_CLASS: &str =
    "kanban-card bg-white p-4 rounded-lg shadow-md hover:shadow-xl transition duration-150 ease-in-out";

#[component]
pub fn ClientCard(controller: ControllerHandle, cliente: Cliente) -> impl IntoView {
    let state = controller.with_value(|c| *c.store());
    let client_id = cliente.id.clone();

    let card_class = {
        let client_id = client_id.clone();
        move || {
            if state.with(|s| s.is_dragging(&client_id)) {
                format!("{} opacity-50", CARD_CLASS)
            } else {
                CARD_CLASS.to_string()
            }
        }
    };

    let on_dragstart = {
        let client_id = client_id.clone();
        move |ev: DragEvent| {
            let controller = controller.get_value();
            controller.on_drag_start(&client_id, &ev.data_transfer());
            let client_id = client_id.clone();
            spawn_local(async move {
                controller.settle_drag_start(&client_id).await;
            });
        }
    };

    let on_dragend = move |_: DragEvent| controller.with_value(|c| c.on_drag_end());

    let on_click = {
        let cliente = cliente.clone();
        move |_| {
            let controller = controller.get_value();
            let cliente = cliente.clone();
            spawn_local(async move {
                controller.on_card_click(cliente).await;
            });
        }
    };

    let logo = match cliente.custom_logo() {
        Some(url) => view! {
            <img
                src=url.to_string()
                alt=format!("Logo de {}", cliente.nome)
                class="w-10 h-10 rounded-full object-cover"
            />
        }
        .into_any(),
        None => view! { <div class="w-10 h-10 default-logo">"L"</div> }.into_any(),
    };

    let label_class = format!(
        "mt-2 text-xs font-medium {}",
        cliente.stage().map(|c| c.label_class()).unwrap_or("text-gray-500")
    );

    view! {
        <div
            class=card_class
            draggable="true"
            data-client-id=client_id
            data-client-name=cliente.nome.clone()
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:click=on_click
        >
            <div class="flex items-center space-x-3">
                {logo}
                <div>
                    <p class="text-lg font-semibold text-gray-800">{cliente.nome.clone()}</p>
                    <p class="text-sm text-gray-500">{format!("Média: {} envios", cliente.media_envio)}</p>
                </div>
            </div>
            <p class=label_class>{format!("Categoria: {}", cliente.categoria)}</p>
        </div>
    }
}
