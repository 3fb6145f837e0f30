use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};
use crate::core::models::UploadFile;
use crate::core::services::ApiError;
use crate::features::kanban::hooks::ControllerHandle;

async fn read_upload(file: &File) -> Result<UploadFile, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::File(format!("{:?}", e)))?;
    Ok(UploadFile {
        name: file.name(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn KanbanHeader(
    controller: ControllerHandle,
    #[prop(into)] total: Signal<usize>,
) -> impl IntoView {
    let on_upload = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        let controller = controller.get_value();
        spawn_local(async move {
            let selected = match file {
                Some(file) => read_upload(&file).await.map(Some),
                None => Ok(None),
            };
            controller.on_file_selected(selected).await;
            // Cleared so the same spreadsheet can be picked again
            input.set_value("");
        });
    };

    let on_export = move |_| controller.with_value(|c| c.on_export());

    view! {
        <header class="kanban-header flex justify-between items-center p-6 bg-white shadow">
            <div>
                <h1 class="text-3xl font-bold text-gray-800">"Kanban de Clientes"</h1>
                <p class="text-sm text-gray-500">{move || format!("{} clientes no quadro", total.get())}</p>
            </div>
            <div class="kanban-actions flex items-center space-x-3">
                <label for="file-upload" class="btn-primary cursor-pointer px-4 py-2 rounded-lg bg-indigo-600 text-white">
                    "Importar Planilha"
                </label>
                <input id="file-upload" type="file" accept=".xlsx,.csv" class="hidden" on:change=on_upload />
                <button
                    id="export-csv-btn"
                    class="btn-secondary px-4 py-2 rounded-lg bg-gray-200 text-gray-800"
                    on:click=on_export
                >
                    "Exportar CSV"
                </button>
            </div>
        </header>
    }
}
