//! Confirm Dialog Component
//!
//! Modal yes/no prompt used before destructive actions.

use leptos::prelude::*;

/// Modal confirmation dialog
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `on_confirm` - Runs when the user accepts
/// * `on_cancel` - Runs on Cancel or a click on the backdrop
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = "Delete".to_string())] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal confirm-modal" on:click=|ev| ev.stop_propagation()>
                    <h2>{title.clone()}</h2>
                    <p>{message.clone()}</p>
                    <div class="modal-actions">
                        <button class="confirm-btn" on:click=move |_| on_confirm.run(())>
                            {confirm_label.clone()}
                        </button>
                        <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
