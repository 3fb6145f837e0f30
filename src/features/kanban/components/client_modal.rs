use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::ev::MouseEvent;
use crate::core::models::{QUALIDADE_OPTIONS, RECORRENCIA_OPTIONS};
use crate::features::kanban::hooks::ControllerHandle;
use crate::features::kanban::state::ModalPhase;

const BACKDROP_CLASS: &str = "fixed inset-0 z-50 bg-black bg-opacity-50 items-center justify-center";
const PANEL_CLASS: &str = "modal-panel bg-white rounded-xl shadow-2xl p-6 w-full max-w-md transform";

/// Detail editor for the client bound in `UiState`. Always mounted, hidden while closed.
#[component]
pub fn ClientModal(controller: ControllerHandle) -> impl IntoView {
    let state = controller.with_value(|c| *c.store());

    let backdrop_class = move || {
        if state.with(|s| s.modal().is_open()) {
            format!("{} flex", BACKDROP_CLASS)
        } else {
            format!("{} hidden", BACKDROP_CLASS)
        }
    };
    let panel_class = move || match state.with(|s| s.modal().phase()) {
        Some(ModalPhase::Shown) => format!("{} scale-100", PANEL_CLASS),
        _ => format!("{} scale-95", PANEL_CLASS),
    };

    let nome = move || {
        state.with(|s| s.modal().session().map(|m| m.cliente.nome.clone()).unwrap_or_default())
    };
    let media_envio = move || {
        state.with(|s| {
            s.modal()
                .session()
                .map(|m| format!("{} envios", m.cliente.media_envio))
                .unwrap_or_default()
        })
    };
    let recuperacao = move || state.with(|s| s.modal().session().map(|m| m.recuperacao).unwrap_or_default());
    let qualidade = move || {
        state.with(|s| s.modal().session().map(|m| m.qualidade.clone()).unwrap_or_default())
    };
    let recorrencia = move || {
        state.with(|s| s.modal().session().map(|m| m.recorrencia.clone()).unwrap_or_default())
    };

    let on_backdrop = move |ev: MouseEvent| {
        let target_is_backdrop = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        };
        let controller = controller.get_value();
        spawn_local(async move {
            controller.on_backdrop_click(target_is_backdrop).await;
        });
    };

    let on_close = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.on_modal_close().await;
        });
    };

    let on_save = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.on_modal_save().await;
        });
    };

    view! {
        <div id="client-modal" class=backdrop_class on:click=on_backdrop>
            <div class=panel_class>
                <div class="flex justify-between items-start mb-4">
                    <div>
                        <h2 id="modal-client-name" class="text-2xl font-bold text-gray-800">{nome}</h2>
                        <p id="modal-media-envio" class="text-sm text-gray-500">{media_envio}</p>
                    </div>
                    <button id="modal-close-btn" type="button" class="text-gray-400 text-2xl" on:click=on_close>
                        "×"
                    </button>
                </div>

                <div class="form-group mb-4">
                    <label for="recuperacao-slider" class="block text-sm font-medium text-gray-700">
                        "Recuperação (%): "
                        <span id="recuperacao-value">{recuperacao}</span>
                    </label>
                    <input
                        id="recuperacao-slider"
                        type="range"
                        min="0"
                        max="100"
                        class="w-full"
                        prop:value=move || recuperacao().to_string()
                        on:input=move |ev| controller.with_value(|c| c.on_slider_input(&event_target_value(&ev)))
                    />
                </div>

                <div class="form-group mb-4">
                    <label for="qualidade-select" class="block text-sm font-medium text-gray-700">"Qualidade"</label>
                    <select
                        id="qualidade-select"
                        class="w-full border rounded-lg p-2"
                        prop:value=qualidade
                        on:change=move |ev| controller.with_value(|c| c.on_qualidade_change(event_target_value(&ev)))
                    >
                        {QUALIDADE_OPTIONS
                            .iter()
                            .map(|option| view! { <option value=*option>{*option}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group mb-6">
                    <label for="recorrencia-select" class="block text-sm font-medium text-gray-700">"Recorrência"</label>
                    <select
                        id="recorrencia-select"
                        class="w-full border rounded-lg p-2"
                        prop:value=recorrencia
                        on:change=move |ev| controller.with_value(|c| c.on_recorrencia_change(event_target_value(&ev)))
                    >
                        {RECORRENCIA_OPTIONS
                            .iter()
                            .map(|option| view! { <option value=*option>{*option}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="modal-actions flex justify-end">
                    <button
                        id="modal-save-btn"
                        type="button"
                        class="btn-primary px-4 py-2 rounded-lg bg-indigo-600 text-white"
                        on:click=on_save
                    >
                        "Salvar"
                    </button>
                </div>
            </div>
        </div>
    }
}
