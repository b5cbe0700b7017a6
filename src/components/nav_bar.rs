//! Navigation Bar Component
//!
//! Top bar linking the main pages.

use leptos::prelude::*;

use crate::router::Route;
use crate::store::{use_app_store, AppStateStoreFields};

const LINKS: &[(&str, &str)] = &[
    ("#/", "Home"),
    ("#/orders", "My Orders"),
    ("#/products", "Products"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    // Editor counts as part of the orders section
    let section = move || match store.route().get() {
        Route::Home => "#/",
        Route::Orders | Route::OrderEditor(_) => "#/orders",
        Route::Products => "#/products",
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-title">"Order Desk"</span>
            {LINKS.iter().map(|(href, label)| {
                let is_active = move || section() == *href;
                view! {
                    <a
                        href=*href
                        class=move || if is_active() { "nav-link active" } else { "nav-link" }
                    >
                        {*label}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
