//! Runtime Configuration
//!
//! The backend base URL and log level, read once at startup from the host
//! page's `<meta>` tags with compile-time and built-in fallbacks.

use log::LevelFilter;

/// Backend used when neither the page nor the build names one
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

const BACKEND_URL_META: &str = "backend-url";
const LOG_LEVEL_META: &str = "log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL without a trailing slash, e.g. `http://localhost:8080`
    pub backend_url: String,
    pub log_level: LevelFilter,
}

impl Config {
    /// Build the config for the running page.
    pub fn from_page() -> Self {
        Self::resolve(
            meta_content(BACKEND_URL_META),
            option_env!("ORDER_DESK_BACKEND_URL"),
            meta_content(LOG_LEVEL_META),
        )
    }

    /// Page value wins over the build value, which wins over the default.
    pub fn resolve(page_url: Option<String>, build_url: Option<&str>, page_level: Option<String>) -> Self {
        let backend_url = page_url
            .or_else(|| build_url.map(str::to_string))
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let log_level = page_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

#[cfg(target_arch = "wasm32")]
fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element.get_attribute("content")
}

#[cfg(not(target_arch = "wasm32"))]
fn meta_content(_name: &str) -> Option<String> {
    None
}
