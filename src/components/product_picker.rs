//! Product Picker Dialog
//!
//! Modal sub-form of the order editor: choose a product and a quantity.
//! Does no I/O; the confirmed pick goes back through `on_confirm`.

use leptos::prelude::*;

use crate::forms::{PickedLine, PickerForm};
use crate::models::{format_price, Product};

/// Product + quantity picker
///
/// # Arguments
/// * `products` - Catalog to choose from
/// * `form` - Dialog state; `None` keeps the dialog closed
/// * `on_confirm` - Receives a validated pick; the dialog closes itself
#[component]
pub fn ProductPickerDialog(
    #[prop(into)] products: Signal<Vec<Product>>,
    form: RwSignal<Option<PickerForm>>,
    #[prop(into)] on_confirm: Callback<PickedLine>,
) -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);

    let is_locked = move || form.with(|f| f.as_ref().is_some_and(PickerForm::is_locked));
    let selected_id = move || form.with(|f| f.as_ref().and_then(|f| f.product_id.clone()));
    // Editing shows the line itself, listed in the catalog or not
    let locked_label = move || form.with(|f| f.as_ref().and_then(|f| f.locked_label().map(str::to_string)));

    let close = move || {
        set_error.set(None);
        form.set(None);
    };

    let confirm = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = form.get_untracked() else { return };
        match products.with_untracked(|catalog| current.confirm(catalog)) {
            Ok(picked) => {
                close();
                on_confirm.run(picked);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <Show when=move || form.with(Option::is_some)>
            <div class="modal-backdrop">
                <form class="modal picker-modal" on:submit=confirm>
                    <h2>{move || if is_locked() { "Edit Product" } else { "Add Product" }}</h2>

                    <label class="form-label">"Product"</label>
                    <select
                        class="form-input"
                        disabled=is_locked
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                if let Some(f) = f {
                                    f.select(value);
                                }
                            });
                        }
                    >
                        <Show
                            when=is_locked
                            fallback=move || view! {
                                <option value="" selected=move || selected_id().is_none()>"Select a product"</option>
                                <For
                                    each=move || products.get()
                                    key=|product| product.id.clone()
                                    children=move |product| {
                                        let id = product.id.clone();
                                        let label = format!("{} - {}", product.name, format_price(product.unit_price));
                                        let is_selected = move || selected_id().as_deref() == Some(id.as_str());
                                        view! {
                                            <option value=product.id.clone() selected=is_selected>{label}</option>
                                        }
                                    }
                                />
                            }
                        >
                            <option value=selected_id selected=true>{locked_label}</option>
                        </Show>
                    </select>

                    <label class="form-label">"Quantity"</label>
                    <input
                        type="number"
                        class="form-input"
                        min="1"
                        step="1"
                        prop:value=move || form.with(|f| f.as_ref().map(|f| f.qty.clone()).unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                if let Some(f) = f {
                                    f.qty = value;
                                }
                            });
                        }
                    />

                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                    <div class="modal-actions">
                        <button type="submit" class="confirm-btn">"Save"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| close()>"Cancel"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
