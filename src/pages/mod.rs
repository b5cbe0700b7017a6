//! Pages
//!
//! One component per route. Each page fetches its own data when mounted.

mod home;
mod order_editor;
mod order_list;
mod product_catalog;

pub use home::HomePage;
pub use order_editor::OrderEditorPage;
pub use order_list::OrderListPage;
pub use product_catalog::ProductCatalogPage;
