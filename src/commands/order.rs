//! Order Commands
//!
//! Bindings for the order endpoints.

use super::{path_with_id, Api, ApiRequest, Transport};
use crate::error::ApiError;
use crate::models::{Order, OrderPayload, OrderSummary};

const ORDERS: &str = "/api/orders";

// ========================
// Requests
// ========================

pub fn list_orders_request() -> ApiRequest {
    ApiRequest::get(ORDERS)
}

pub fn get_order_request(id: &str) -> ApiRequest {
    ApiRequest::get(path_with_id(ORDERS, id))
}

pub fn create_order_request(order: &OrderPayload) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(ORDERS, order)
}

pub fn update_order_request(order: &OrderPayload) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(path_with_id(ORDERS, &order.id), order)
}

pub fn delete_order_request(id: &str) -> ApiRequest {
    ApiRequest::delete(path_with_id(ORDERS, id))
}

// ========================
// Commands
// ========================

impl<T: Transport> Api<T> {
    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>, ApiError> {
        self.call_json(list_orders_request()).await
    }

    /// `ApiError::NotFound` when the backend has no such order
    pub async fn get_order(&self, id: &str) -> Result<Order, ApiError> {
        self.call_json(get_order_request(id)).await
    }

    pub async fn create_order(&self, order: &OrderPayload) -> Result<(), ApiError> {
        self.call(create_order_request(order)?).await.map(|_| ())
    }

    pub async fn update_order(&self, order: &OrderPayload) -> Result<(), ApiError> {
        self.call(update_order_request(order)?).await.map(|_| ())
    }

    pub async fn delete_order(&self, id: &str) -> Result<(), ApiError> {
        self.call(delete_order_request(id)).await.map(|_| ())
    }
}
