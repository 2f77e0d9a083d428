use leptos::prelude::*;

use crate::components::TodoCard;
use crate::models::TodoItem;

/// Scrollable card list over the published todos
///
/// Renders nothing inside the scroll container until a page has been
/// published; cards keep server order.
#[component]
pub fn TodoListView(
    todos: Signal<Vec<TodoItem>>,
    #[prop(into)] on_edit: Callback<u32>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="todo-scroll">
            <For
                each=move || todos.get()
                key=|item| item.id
                children=move |item| {
                    view! { <TodoCard item=item on_edit=on_edit on_delete=on_delete /> }
                }
            />
        </div>
    }
}
