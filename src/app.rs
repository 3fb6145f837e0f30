use leptos::prelude::*;
use crate::pages::Kanban;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <Kanban />
        </main>
    }
}
