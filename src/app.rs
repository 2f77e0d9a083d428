//! To-Do List Frontend App
//!
//! Main application component: header, card list, floating action button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::TodoApi;
use crate::components::{AddTodoSheet, DeleteConfirmDialog, TodoListView};
use crate::controller::TodoController;
use crate::repository::RemoteTodoRepository;

#[component]
pub fn App() -> impl IntoView {
    let controller = TodoController::new(RemoteTodoRepository::new(TodoApi::default()));
    let published = controller.todos();

    // Transient UI state, reset on every cold start
    let (sheet_open, set_sheet_open) = signal(false);
    let (confirm_delete, set_confirm_delete) = signal::<Option<u32>>(None);

    // Fetch once on mount. A failure keeps whatever is already shown;
    // there is no retry and no user-visible error surface.
    {
        let controller = controller.clone();
        Effect::new(move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(e) = controller.refresh().await {
                    web_sys::console::error_1(&format!("[APP] refresh failed: {}", e).into());
                }
            });
        });
    }

    let todos = Signal::derive(move || {
        published
            .get()
            .map(|page| page.todos)
            .unwrap_or_default()
    });

    // Extension points: the remote API is read-only for now, so both
    // actions just log.
    let on_edit = Callback::new(|id: u32| {
        web_sys::console::log_1(&format!("[APP] edit todo {} requested", id).into());
    });
    let on_delete_confirmed = Callback::new(|id: u32| {
        web_sys::console::log_1(&format!("[APP] delete todo {} requested", id).into());
    });
    let request_delete = Callback::new(move |id: u32| set_confirm_delete.set(Some(id)));

    view! {
        <div class="app-layout">
            <h1 class="app-title">"To-Do List"</h1>

            <TodoListView todos=todos on_edit=on_edit on_delete=request_delete />

            <button class="fab" title="Add" on:click=move |_| set_sheet_open.set(true)>
                "+"
            </button>

            <Show when=move || sheet_open.get()>
                <AddTodoSheet on_close=move |_: ()| set_sheet_open.set(false) />
            </Show>

            {move || {
                confirm_delete.get().map(|id| view! {
                    <DeleteConfirmDialog
                        item_id=id
                        on_confirm=on_delete_confirmed
                        on_cancel=move |_: ()| set_confirm_delete.set(None)
                    />
                })
            }}
        </div>
    }
}
