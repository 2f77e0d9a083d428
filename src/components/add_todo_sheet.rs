//! Add Todo Sheet Component
//!
//! Modal bottom sheet opened by the floating action button. Static
//! placeholder content; not bound to the todo data.

use leptos::prelude::*;

/// Bottom sheet with a single dismiss control
///
/// Clicking the backdrop dismisses it too.
#[component]
pub fn AddTodoSheet(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="sheet-backdrop" on:click=move |_| on_close.run(())>
            <div class="bottom-sheet" on:click=move |ev| ev.stop_propagation()>
                <p class="sheet-text">"Bottom Sheet Content"</p>
                <button class="sheet-close-btn" on:click=move |_| on_close.run(())>
                    "Close Bottom Sheet"
                </button>
            </div>
        </div>
    }
}
