//! Order Editor Page
//!
//! Create or edit one order: line items through the product picker, status,
//! derived totals, and a single whole-order save.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{ProductPickerDialog, StatusSelector};
use crate::context::use_app_context;
use crate::draft::OrderDraft;
use crate::forms::{PickedLine, PickerForm};
use crate::models::{format_date, format_price, OrderStatus, Product};
use crate::router::Route;
use crate::store::{navigate, report_error, use_app_store};

#[component]
pub fn OrderEditorPage(order_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // None until the load settles
    let draft = RwSignal::new(None::<OrderDraft>);
    let (catalog, set_catalog) = signal(Vec::<Product>::new());
    let picker = RwSignal::new(None::<PickerForm>);
    let (saving, set_saving) = signal(false);

    // Catalog for the picker, fetched once
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.list_products().await {
                Ok(loaded) => set_catalog.set(loaded),
                Err(err) => report_error(&store, "Could not load products", &err),
            }
        });
    });

    // Order itself; a missing order becomes a new one under this id
    Effect::new(move |_| {
        let api = ctx.api();
        let id = order_id.clone();
        spawn_local(async move {
            let (loaded, error) = actions::open_order(&api, &id, Local::now().date_naive()).await;
            if let Some(err) = error {
                report_error(&store, "Could not load order", &err);
            }
            draft.set(Some(loaded));
        });
    });

    // Derived fields
    let is_new = move || draft.with(|d| d.as_ref().map_or(true, |d| d.is_new));
    let products_count = move || draft.with(|d| d.as_ref().map_or(0, OrderDraft::products_count));
    let final_price = move || draft.with(|d| d.as_ref().map_or(0.0, OrderDraft::final_price));
    let status = Signal::derive(move || draft.with(|d| d.as_ref().map(|d| d.status).unwrap_or_default()));

    let add_line = move |_| picker.set(Some(PickerForm::for_add()));

    let edit_line = move |product_id: String| {
        let form = draft.with_untracked(|d| d.as_ref().and_then(|d| d.line(&product_id)).map(PickerForm::for_edit));
        if let Some(form) = form {
            picker.set(Some(form));
        }
    };

    let remove_line = move |product_id: String| {
        draft.update(|d| {
            if let Some(d) = d {
                d.remove_line(&product_id);
            }
        });
    };

    let apply_pick = move |picked: PickedLine| {
        draft.update(|d| {
            if let Some(d) = d {
                d.apply_pick(&picked);
            }
        });
    };

    let set_status = move |new_status: OrderStatus| {
        draft.update(|d| {
            if let Some(d) = d {
                d.set_status(new_status);
            }
        });
    };

    let save = move |_| {
        let Some(current) = draft.get_untracked() else { return };
        let api = ctx.api();
        set_saving.set(true);
        spawn_local(async move {
            match actions::save_order(&api, &current).await {
                Ok(()) => navigate(Route::Orders),
                Err(err) => {
                    report_error(&store, "Could not save order", &err);
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <section class="order-editor">
            <h1>{move || if is_new() { "Add Order" } else { "Edit Order" }}</h1>

            {move || draft.with(Option::is_none).then(|| view! { <p class="loading">"Loading..."</p> })}

            <div class="order-fields">
                <label class="form-label">"Order #"</label>
                <input
                    type="text"
                    class="form-input"
                    disabled=true
                    prop:value=move || draft.with(|d| d.as_ref().map(|d| d.order_number.clone()).unwrap_or_default())
                />

                <label class="form-label">"Date"</label>
                <input
                    type="text"
                    class="form-input"
                    disabled=true
                    prop:value=move || draft.with(|d| format_date(d.as_ref().and_then(|d| d.date)))
                />

                <label class="form-label">"Status"</label>
                <StatusSelector current=status on_change=set_status />

                <label class="form-label">"# Products"</label>
                <input type="text" class="form-input" disabled=true prop:value=move || products_count().to_string() />

                <label class="form-label">"Final Price"</label>
                <input type="text" class="form-input" disabled=true prop:value=move || format_price(final_price()) />
            </div>

            <button class="primary-btn" on:click=add_line>"Add Product"</button>

            <h2>"Products in Order"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Unit Price"</th>
                        <th>"Qty"</th>
                        <th>"Total Price"</th>
                        <th>"Options"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || draft.with(|d| d.as_ref().map(|d| d.line_items().to_vec()).unwrap_or_default())
                        key=|line| (line.id.clone(), line.qty)
                        children=move |line| {
                            let edit_id = line.id.clone();
                            let remove_id = line.id.clone();
                            view! {
                                <tr>
                                    <td>{line.name.clone()}</td>
                                    <td>{format_price(line.unit_price)}</td>
                                    <td>{line.qty}</td>
                                    <td>{format_price(line.total_price)}</td>
                                    <td class="row-actions">
                                        <button class="edit-btn" on:click=move |_| edit_line(edit_id.clone())>
                                            "Edit"
                                        </button>
                                        <button class="delete-btn" on:click=move |_| remove_line(remove_id.clone())>
                                            "Remove"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <div class="page-actions">
                <button
                    class="primary-btn"
                    disabled=move || saving.get() || draft.with(Option::is_none)
                    on:click=save
                >
                    "Save Order"
                </button>
                <a class="secondary-btn" href="#/orders">"Back to Orders"</a>
            </div>

            <ProductPickerDialog products=catalog form=picker on_confirm=apply_pick />
        </section>
    }
}
