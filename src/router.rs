//! Hash Router
//!
//! Pages are addressed by the URL fragment so they can be linked and the
//! back button works without a server-side router.

use percent_encoding::percent_decode_str;

use crate::commands::path_with_id;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Products,
    Orders,
    /// Editor for an existing order or a freshly generated id
    OrderEditor(String),
}

impl Route {
    /// Unknown fragments land on `Home`.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let mut parts = path.splitn(2, '/');
        match (parts.next().unwrap_or_default(), parts.next()) {
            ("products", None) => Route::Products,
            ("orders", None) => Route::Orders,
            ("orders", Some(id)) if !id.is_empty() && !id.contains('/') => {
                Route::OrderEditor(percent_decode_str(id).decode_utf8_lossy().into_owned())
            }
            _ => Route::Home,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Products => "#/products".to_string(),
            Route::Orders => "#/orders".to_string(),
            Route::OrderEditor(id) => path_with_id("#/orders", id),
        }
    }
}

/// Route for the page's current fragment
pub fn current_route() -> Route {
    let hash = leptos::prelude::window().location().hash().unwrap_or_default();
    Route::from_hash(&hash)
}

/// Move to `route`. The `hashchange` listener in `App` picks it up.
pub fn go_to(route: &Route) {
    if let Err(err) = leptos::prelude::window().location().set_hash(&route.to_hash()) {
        log::error!("Failed to navigate to {}: {:?}", route.to_hash(), err);
    }
}
