//! Order List Page
//!
//! Table of all orders with edit, delete-with-confirmation and "Add New
//! Order".

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::actions;
use crate::components::ConfirmDialog;
use crate::context::use_app_context;
use crate::models::{format_date, format_price, OrderSummary};
use crate::router::Route;
use crate::store::{navigate, report_error, use_app_store};

#[component]
pub fn OrderListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (orders, set_orders) = signal(Vec::<OrderSummary>::new());
    let (loading, set_loading) = signal(true);
    let (pending_delete, set_pending_delete) = signal::<Option<String>>(None);

    // Load orders on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.list_orders().await {
                Ok(loaded) => {
                    log::info!("Loaded {} orders", loaded.len());
                    set_orders.set(loaded);
                }
                Err(err) => report_error(&store, "Could not load orders", &err),
            }
            set_loading.set(false);
        });
    });

    let confirm_delete = move |_: ()| {
        let Some(id) = pending_delete.get_untracked() else { return };
        let api = ctx.api();
        spawn_local(async move {
            match actions::delete_order(&api, &id).await {
                Ok(()) => {
                    set_orders.update(|list| actions::remove_order(list, &id));
                    set_pending_delete.set(None);
                }
                Err(err) => report_error(&store, "Could not delete order", &err),
            }
        });
    };

    let add_order = move |_| navigate(Route::OrderEditor(Uuid::new_v4().to_string()));

    view! {
        <section class="order-list">
            <h1>"My Orders"</h1>

            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Order Number"</th>
                        <th>"Date"</th>
                        <th>"# Products"</th>
                        <th>"Final Price"</th>
                        <th>"Status"</th>
                        <th>"Options"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.get()
                        key=|order| order.id.clone()
                        children=move |order| {
                            let edit_id = order.id.clone();
                            let delete_id = order.id.clone();
                            view! {
                                <tr>
                                    <td>{order.display_number().to_string()}</td>
                                    <td>{format_date(order.day())}</td>
                                    <td>{order.products_number}</td>
                                    <td>{format_price(order.final_price)}</td>
                                    <td>{order.status.as_str()}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| navigate(Route::OrderEditor(edit_id.clone()))
                                        >
                                            "Edit Order"
                                        </button>
                                        <button
                                            class="delete-btn"
                                            on:click=move |_| set_pending_delete.set(Some(delete_id.clone()))
                                        >
                                            "Delete Order"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || !loading.get() && orders.with(Vec::is_empty)>
                <p class="empty">"No orders yet."</p>
            </Show>

            <div class="page-actions">
                <button class="primary-btn" on:click=add_order>"Add New Order"</button>
                <a class="secondary-btn" href="#/">"Back to Home"</a>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Confirm Deletion"
                message="Are you sure you want to delete this order?"
                on_confirm=confirm_delete
                on_cancel=move |_: ()| set_pending_delete.set(None)
            />
        </section>
    }
}
