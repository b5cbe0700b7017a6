//! In-memory transport for tests: records every request and replays
//! queued responses in order. An empty queue answers `200` with no body.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{ApiRequest, ApiResponse, Transport};
use crate::error::ApiError;

#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn respond_json(&self, body: serde_json::Value) {
        self.respond(200, &body.to_string());
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(ApiResponse {
            status: 200,
            body: String::new(),
        }))
    }
}
