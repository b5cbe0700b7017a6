//! Product Commands
//!
//! Bindings for the catalog endpoints.

use super::{path_with_id, Api, ApiRequest, Transport};
use crate::error::ApiError;
use crate::models::Product;

const PRODUCTS: &str = "/api/products";

// ========================
// Requests
// ========================

pub fn list_products_request() -> ApiRequest {
    ApiRequest::get(PRODUCTS)
}

pub fn create_product_request(product: &Product) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(format!("{}/add", PRODUCTS), product)
}

pub fn update_product_request(product: &Product) -> Result<ApiRequest, ApiError> {
    ApiRequest::put(path_with_id(&format!("{}/change", PRODUCTS), &product.id), product)
}

pub fn delete_product_request(id: &str) -> ApiRequest {
    ApiRequest::delete(path_with_id(&format!("{}/delete", PRODUCTS), id))
}

// ========================
// Commands
// ========================

impl<T: Transport> Api<T> {
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.call_json(list_products_request()).await
    }

    /// Create a product. Returns the backend's copy when it echoes one,
    /// otherwise the product exactly as sent.
    pub async fn create_product(&self, product: &Product) -> Result<Product, ApiError> {
        let created = self.call_optional_json(create_product_request(product)?).await?;
        Ok(created.unwrap_or_else(|| product.clone()))
    }

    pub async fn update_product(&self, product: &Product) -> Result<Product, ApiError> {
        let updated = self.call_optional_json(update_product_request(product)?).await?;
        Ok(updated.unwrap_or_else(|| product.clone()))
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.call(delete_product_request(id)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::RecordingTransport;
    use crate::commands::Method;
    use futures::executor::block_on;
    use serde_json::json;

    fn widget() -> Product {
        Product {
            id: "w-1".to_string(),
            name: "Widget".to_string(),
            unit_price: 9.99,
        }
    }

    #[test]
    fn test_create_posts_name_and_price() {
        let api = Api::new(RecordingTransport::new());
        let created = block_on(api.create_product(&widget())).unwrap();
        assert_eq!(created, widget());

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/api/products/add");
        assert_eq!(
            requests[0].body,
            Some(json!({ "id": "w-1", "name": "Widget", "unitPrice": 9.99 }))
        );
    }

    #[test]
    fn test_create_prefers_backend_copy() {
        let api = Api::new(RecordingTransport::new());
        api.transport().respond_json(json!({ "id": 41, "name": "Widget", "unitPrice": "9.99" }));
        let created = block_on(api.create_product(&widget())).unwrap();
        assert_eq!(created.id, "41");
    }

    #[test]
    fn test_update_and_delete_paths() {
        assert_eq!(update_product_request(&widget()).unwrap().path, "/api/products/change/w-1");
        let delete = delete_product_request("w-1");
        assert_eq!(delete.method, Method::Delete);
        assert_eq!(delete.path, "/api/products/delete/w-1");
        assert!(delete.body.is_none());
    }

    #[test]
    fn test_list_products() {
        let api = Api::new(RecordingTransport::new());
        api.transport().respond_json(json!([
            { "id": "a", "name": "Bolt", "unitPrice": 0.5 },
            { "id": "b", "name": "Nut", "unitPrice": "0.25" }
        ]));
        let products = block_on(api.list_products()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].unit_price, 0.25);
        assert_eq!(api.transport().requests()[0], list_products_request());
    }

    #[test]
    fn test_delete_failure_is_reported() {
        let api = Api::new(RecordingTransport::new());
        api.transport().respond(409, "in use");
        let err = block_on(api.delete_product("a")).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 409, .. }));
    }
}
