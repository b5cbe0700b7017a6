//! Product Form Dialog
//!
//! Add/Edit form for a catalog product. Validates locally and hands the
//! product to the page, which keeps the dialog open until the save lands.

use leptos::prelude::*;
use uuid::Uuid;

use crate::forms::ProductForm;
use crate::models::Product;

/// Product add/edit dialog
///
/// # Arguments
/// * `form` - Dialog state; `None` keeps the dialog closed
/// * `on_save` - Receives the validated product and whether it is new
#[component]
pub fn ProductFormDialog(
    form: RwSignal<Option<ProductForm>>,
    #[prop(into)] on_save: Callback<(Product, bool)>,
) -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);

    let field = move |read: fn(&ProductForm) -> String| form.with(|f| f.as_ref().map(read).unwrap_or_default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = form.get_untracked() else { return };
        match current.validate(|| Uuid::new_v4().to_string()) {
            Ok(product) => {
                set_error.set(None);
                on_save.run((product, current.is_new()));
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let close = move |_| {
        set_error.set(None);
        form.set(None);
    };

    view! {
        <Show when=move || form.with(Option::is_some)>
            <div class="modal-backdrop">
                <form class="modal product-modal" on:submit=submit>
                    <h2>{move || if form.with(|f| f.as_ref().is_some_and(ProductForm::is_new)) { "Add Product" } else { "Edit Product" }}</h2>

                    <label class="form-label">"Name"</label>
                    <input
                        type="text"
                        class="form-input"
                        prop:value=move || field(|f| f.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                if let Some(f) = f {
                                    f.name = value;
                                }
                            });
                        }
                    />

                    <label class="form-label">"Unit Price"</label>
                    <input
                        type="number"
                        class="form-input"
                        min="0"
                        step="0.01"
                        prop:value=move || field(|f| f.price.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                if let Some(f) = f {
                                    f.price = value;
                                }
                            });
                        }
                    />

                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                    <div class="modal-actions">
                        <button type="submit" class="confirm-btn">"Save"</button>
                        <button type="button" class="cancel-btn" on:click=close>"Cancel"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
