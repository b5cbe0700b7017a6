//! UI Components
//!
//! Reusable Leptos components.

mod confirm_dialog;
mod error_banner;
mod nav_bar;
mod product_form_dialog;
mod product_picker;
mod status_selector;

pub use confirm_dialog::ConfirmDialog;
pub use error_banner::ErrorBanner;
pub use nav_bar::NavBar;
pub use product_form_dialog::ProductFormDialog;
pub use product_picker::ProductPickerDialog;
pub use status_selector::StatusSelector;
