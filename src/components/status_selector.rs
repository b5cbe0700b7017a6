//! Status Selector Component
//!
//! Order status buttons; any status can be picked from any other.

use leptos::prelude::*;

use crate::models::OrderStatus;

#[component]
pub fn StatusSelector(
    #[prop(into)] current: Signal<OrderStatus>,
    #[prop(into)] on_change: Callback<OrderStatus>,
) -> impl IntoView {
    view! {
        <div class="status-selector">
            {OrderStatus::ALL.iter().map(|status| {
                let status = *status;
                let is_selected = move || current.get() == status;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "status-btn active" } else { "status-btn" }
                        on:click=move |_| on_change.run(status)
                    >
                        {status.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
