//! Order Desk App
//!
//! Root component: provides shared state, follows the URL fragment and
//! renders the page for the current route.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ErrorBanner, NavBar};
use crate::config::Config;
use crate::context::AppContext;
use crate::pages::{HomePage, OrderEditorPage, OrderListPage, ProductCatalogPage};
use crate::router::{self, Route};
use crate::store::{store_set_route, AppState, AppStateStoreFields};

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store = Store::new(AppState::new(router::current_route()));

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(&config));

    // Follow back/forward and link clicks
    let _hash_listener = window_event_listener(ev::hashchange, move |_| {
        let route = router::current_route();
        log::debug!("Route changed to {}", route.to_hash());
        store_set_route(&store, route);
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <ErrorBanner />
            <main class="main-content">
                {move || match store.route().get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Products => view! { <ProductCatalogPage /> }.into_any(),
                    Route::Orders => view! { <OrderListPage /> }.into_any(),
                    Route::OrderEditor(id) => view! { <OrderEditorPage order_id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
