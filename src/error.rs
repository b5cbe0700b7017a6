//! Error Types
//!
//! Failures from backend calls and from form validation.

use thiserror::Error;

/// A failed backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("backend returned {status} for {path}: {body}")]
    Status { status: u16, path: String, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response from {path}: {message}")]
    Decode { path: String, message: String },
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

/// Input rejected by one of the forms
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Name is required")]
    EmptyName,
    #[error("Price must be a non-negative number")]
    InvalidPrice,
    #[error("Select a product")]
    NoProductSelected,
    #[error("Quantity must be a whole number of at least 1")]
    InvalidQuantity,
    #[error("Product {0} is no longer in the catalog")]
    UnknownProduct(String),
}
