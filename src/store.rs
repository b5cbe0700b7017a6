//! Global Application State Store
//!
//! Uses Leptos reactive_stores for the little state shared across pages:
//! the current route and the error notice. Page data stays page-local.

use std::fmt::Display;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::router::{self, Route};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub route: Route,
    /// Last failure shown to the user, if not yet dismissed
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(route: Route) -> Self {
        Self { route, notice: None }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn navigate(route: Route) {
    log::debug!("Navigating to {}", route.to_hash());
    router::go_to(&route);
}

/// Adopt a route reported by the browser. Same-route updates are dropped so
/// the page is not rebuilt.
pub fn store_set_route(store: &AppStore, route: Route) {
    if store.route().get_untracked() != route {
        store.route().set(route);
    }
}

/// Log a failure and show it in the banner.
pub fn report_error(store: &AppStore, action: &str, err: &impl Display) {
    log::error!("{}: {}", action, err);
    store.notice().set(Some(format!("{}: {}", action, err)));
}

pub fn clear_notice(store: &AppStore) {
    store.notice().set(None);
}
