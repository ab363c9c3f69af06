//! Gateway response → HTTP response.

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, StatusCode},
    response::Response,
};

use crate::gateway::ApiResponse;

/// Convert a gateway response into an HTTP response.
///
/// Header entries that are not valid HTTP are dropped with a warning. Bodies
/// are always sent as-is; the handler never base64-encodes.
pub fn into_http_response(api: ApiResponse) -> Response {
    let status = StatusCode::from_u16(api.status_code).unwrap_or_else(|_| {
        tracing::warn!(status = api.status_code, "Invalid status code from handler");
        StatusCode::INTERNAL_SERVER_ERROR
    });

    let mut response = Response::new(Body::from(api.body));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    for (name, value) in &api.headers {
        match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Dropping invalid response header"),
        }
    }

    response
}
