//! Page Actions
//!
//! The backend round-trips behind each page, kept apart from the views so
//! they run against any transport.

use chrono::NaiveDate;

use crate::commands::{Api, Transport};
use crate::draft::OrderDraft;
use crate::error::ApiError;
use crate::models::{OrderSummary, Product};

// ========================
// Order Editor
// ========================

/// Fetch `id` for editing. A missing order starts a new draft under that
/// id; any other failure also starts one and hands the error back.
pub async fn open_order<T: Transport>(api: &Api<T>, id: &str, today: NaiveDate) -> (OrderDraft, Option<ApiError>) {
    match api.get_order(id).await {
        Ok(order) => {
            log::info!("Loaded order {} with {} lines", order.id, order.line_items.len());
            (OrderDraft::from_order(order), None)
        }
        Err(err) if err.is_not_found() => {
            log::info!("Order {} not on backend, starting a new one", id);
            (OrderDraft::new(id, today), None)
        }
        Err(err) => (OrderDraft::new(id, today), Some(err)),
    }
}

/// Create or update the whole order depending on whether it pre-existed.
pub async fn save_order<T: Transport>(api: &Api<T>, draft: &OrderDraft) -> Result<(), ApiError> {
    let payload = draft.to_payload();
    let result = if draft.is_new {
        api.create_order(&payload).await
    } else {
        api.update_order(&payload).await
    };
    if result.is_ok() {
        log::info!(
            "Saved order {} ({} products, {:.2})",
            payload.id,
            payload.products_number,
            payload.final_price
        );
    }
    result
}

// ========================
// Order List
// ========================

/// Delete on the backend; the caller drops the row once this succeeds.
pub async fn delete_order<T: Transport>(api: &Api<T>, id: &str) -> Result<(), ApiError> {
    api.delete_order(id).await?;
    log::info!("Deleted order {}", id);
    Ok(())
}

pub fn remove_order(orders: &mut Vec<OrderSummary>, id: &str) {
    orders.retain(|order| order.id != id);
}

// ========================
// Product Catalog
// ========================

/// Create or update; returns the product as it should now be shown.
pub async fn save_product<T: Transport>(api: &Api<T>, product: &Product, is_new: bool) -> Result<Product, ApiError> {
    let saved = if is_new {
        api.create_product(product).await?
    } else {
        api.update_product(product).await?
    };
    log::info!("Saved product {}", saved.id);
    Ok(saved)
}

pub async fn delete_product<T: Transport>(api: &Api<T>, id: &str) -> Result<(), ApiError> {
    api.delete_product(id).await?;
    log::info!("Deleted product {}", id);
    Ok(())
}

/// Replace the product with the same id, or append it.
pub fn upsert_product(products: &mut Vec<Product>, product: Product) {
    match products.iter_mut().find(|p| p.id == product.id) {
        Some(existing) => *existing = product,
        None => products.push(product),
    }
}

pub fn remove_product(products: &mut Vec<Product>, id: &str) {
    products.retain(|product| product.id != id);
}
