//! Todo Card Component
//!
//! One card per todo item: single-line text plus edit/delete affordances.

use leptos::prelude::*;

use crate::models::TodoItem;

/// Card for a single todo item
///
/// The card only reports clicks; what edit and delete actually do is
/// decided by the caller.
#[component]
pub fn TodoCard(
    item: TodoItem,
    #[prop(into)] on_edit: Callback<u32>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let id = item.id;
    let text = item.todo;

    view! {
        <div class="todo-card" class:completed=item.completed>
            // CSS ellipsizes the text when it overflows one line
            <span class="todo-text" title=text.clone()>{text.clone()}</span>
            <div class="todo-actions">
                <button
                    class="icon-btn edit"
                    title="Edit"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(id);
                    }
                >
                    "✎"
                </button>
                <button
                    class="icon-btn delete"
                    title="Delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.run(id);
                    }
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
