//! UI Components
//!
//! Reusable Leptos components.

mod add_todo_sheet;
mod delete_confirm_dialog;
mod todo_card;
mod todo_list;

pub use add_todo_sheet::AddTodoSheet;
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use todo_card::TodoCard;
pub use todo_list::TodoListView;
