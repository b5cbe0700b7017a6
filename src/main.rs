//! Order Desk Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod draft;
mod error;
mod forms;
mod logging;
mod models;
mod pages;
mod router;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_page();
    logging::init(config.log_level);
    log::info!("Order Desk starting, backend at {}", config.backend_url);

    mount_to_body(move || view! { <App config=config /> });
}
