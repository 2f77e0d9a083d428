//! Delete Confirm Dialog Component
//!
//! Modal confirmation shown before a card's delete action runs.

use leptos::prelude::*;

/// Confirm/cancel dialog over the delete affordance
///
/// # Arguments
/// * `item_id` - The todo the dialog is about
/// * `on_confirm` - Callback to execute when the user confirms
/// * `on_cancel` - Callback that closes the dialog without acting
#[component]
pub fn DeleteConfirmDialog(
    item_id: u32,
    #[prop(into)] on_confirm: Callback<u32>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="confirm-dialog" on:click=move |ev| ev.stop_propagation()>
                <p class="dialog-text">{format!("Delete todo #{}?", item_id)}</p>
                <div class="dialog-actions">
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_confirm.run(item_id);
                            on_cancel.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_cancel.run(());
                        }
                    >
                        "✗"
                    </button>
                </div>
            </div>
        </div>
    }
}
