//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::{BackendApi, HttpTransport};
use crate::config::Config;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<BackendApi>,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        Self {
            api: StoredValue::new(BackendApi::new(HttpTransport::new(config.backend_url.clone()))),
        }
    }

    /// Backend client for a spawned task
    pub fn api(&self) -> BackendApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
