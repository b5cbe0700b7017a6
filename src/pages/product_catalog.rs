//! Product Catalog Page
//!
//! Product list with add, edit and immediate delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::ProductFormDialog;
use crate::context::use_app_context;
use crate::forms::ProductForm;
use crate::models::{format_price, Product};
use crate::store::{report_error, use_app_store};

#[component]
pub fn ProductCatalogPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let form = RwSignal::new(None::<ProductForm>);

    // Load catalog on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.list_products().await {
                Ok(loaded) => {
                    log::info!("Loaded {} products", loaded.len());
                    set_products.set(loaded);
                }
                Err(err) => report_error(&store, "Could not load products", &err),
            }
            set_loading.set(false);
        });
    });

    let save = move |(product, is_new): (Product, bool)| {
        let api = ctx.api();
        spawn_local(async move {
            match actions::save_product(&api, &product, is_new).await {
                Ok(saved) => {
                    set_products.update(|list| actions::upsert_product(list, saved));
                    form.set(None);
                }
                Err(err) => report_error(&store, "Could not save product", &err),
            }
        });
    };

    let delete = move |id: String| {
        let api = ctx.api();
        spawn_local(async move {
            match actions::delete_product(&api, &id).await {
                Ok(()) => set_products.update(|list| actions::remove_product(list, &id)),
                Err(err) => report_error(&store, "Could not delete product", &err),
            }
        });
    };

    view! {
        <section class="product-catalog">
            <h1>"Products"</h1>

            {move || if loading.get() {
                view! { <p class="loading">"Loading..."</p> }.into_any()
            } else {
                view! {
                    <div class="product-grid">
                        <For
                            each=move || products.get()
                            key=|product| (product.id.clone(), product.name.clone(), product.unit_price.to_bits())
                            children=move |product| {
                                let edit_form = ProductForm::for_product(&product);
                                let delete_id = product.id.clone();
                                view! {
                                    <div class="product-card">
                                        <h2>{product.name.clone()}</h2>
                                        <p class="price">{format_price(product.unit_price)}</p>
                                        <div class="card-actions">
                                            <button
                                                class="edit-btn"
                                                on:click=move |_| form.set(Some(edit_form.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="delete-btn"
                                                on:click=move |_| delete(delete_id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                }.into_any()
            }}

            <div class="page-actions">
                <button class="primary-btn" on:click=move |_| form.set(Some(ProductForm::blank()))>
                    "Add Product"
                </button>
                <a class="secondary-btn" href="#/">"Back to Home"</a>
            </div>

            <ProductFormDialog form=form on_save=save />
        </section>
    }
}
