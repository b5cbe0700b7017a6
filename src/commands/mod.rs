//! Backend Commands
//!
//! REST bindings to the orders/products backend, organized by domain.
//! Requests are built as plain values and handed to a [`Transport`], so
//! everything above the wire can run without a browser.

mod order;
mod product;

#[cfg(test)]
pub mod testing;

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

pub use order::*;
pub use product::*;

/// Characters left alone in a path segment (RFC 3986 unreserved)
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// A backend call, relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }

    pub fn post<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        Self::with_body(Method::Post, path, body)
    }

    pub fn put<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        Self::with_body(Method::Put, path, body)
    }

    fn with_body<T: Serialize>(method: Method, path: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self { method, path: path.into(), body: Some(body) })
    }
}

/// Raw status and body of a completed call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a request and returns whatever came back. Status handling is the
/// caller's job; only failures to get a response at all are errors here.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Typed access to the backend over some transport
#[derive(Debug, Clone)]
pub struct Api<T> {
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send and fail on any non-2xx status.
    async fn call(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("{} {}", request.method, request.path);
        let response = self.transport.send(&request).await?;
        match response.status {
            200..=299 => Ok(response),
            404 => Err(ApiError::NotFound(request.path)),
            status => Err(ApiError::Status {
                status,
                path: request.path,
                body: response.body,
            }),
        }
    }

    async fn call_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let path = request.path.clone();
        let response = self.call(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
            path,
            message: e.to_string(),
        })
    }

    /// Like `call_json` but an empty or unrecognised body is `None`.
    async fn call_optional_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<Option<R>, ApiError> {
        let response = self.call(request).await?;
        Ok(serde_json::from_str(&response.body).ok())
    }
}

/// `/api/orders/{id}` with `id` encoded as a single segment
pub(crate) fn path_with_id(prefix: &str, id: &str) -> String {
    format!("{}/{}", prefix, utf8_percent_encode(id, SEGMENT))
}

// ========================
// HTTP Transport
// ========================

/// Browser `fetch` transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::Request;

        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

/// The transport the running app uses
pub type BackendApi = Api<HttpTransport>;
