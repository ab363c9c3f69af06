//! Inbound request handling.
//!
//! # Responsibilities
//! - Generate a request ID (UUID v4) when the client did not send one
//! - Translate an HTTP request into the gateway's [`ApiRequest`]

use axum::http::{HeaderValue, Method, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::gateway::ApiRequest;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID source for `SetRequestIdLayer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build the gateway request for an HTTP method and raw body.
///
/// An empty body is treated as absent; invalid UTF-8 is replaced, not rejected.
pub fn to_api_request(method: &Method, body: &[u8]) -> ApiRequest {
    let body = if body.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(body).into_owned())
    };
    ApiRequest::new(method.as_str(), body)
}
