//! Invocation contract shared with the hosting gateway.
//!
//! The gateway hands the handler an [`ApiRequest`] and expects an
//! [`ApiResponse`] back. Field names follow the gateway's camelCase wire format.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Body substituted when the gateway sends none.
pub const EMPTY_BODY: &str = "{}";

/// Normalized request as delivered by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    /// HTTP method name. Matched case-sensitively.
    #[serde(default = "default_method")]
    pub http_method: String,

    /// Raw request body. The outer `None` means the key was absent; an
    /// explicit `null` is `Some(None)`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<Option<String>>,
}

fn default_method() -> String {
    "GET".to_string()
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ApiRequest {
    /// Request whose body is either text or absent.
    pub fn new(http_method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            http_method: http_method.into(),
            body: body.map(Some),
        }
    }

    /// The body to parse. An absent body reads as [`EMPTY_BODY`]; an explicit
    /// `null` yields `None`.
    pub fn body_or_default(&self) -> Option<&str> {
        match &self.body {
            None => Some(EMPTY_BODY),
            Some(body) => body.as_deref(),
        }
    }
}

/// Normalized response returned to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ApiResponse {
    /// Plain-text response; never base64 encoded.
    pub fn new(status_code: u16, headers: BTreeMap<String, String>, body: String) -> Self {
        Self {
            status_code,
            headers,
            body,
            is_base64_encoded: false,
        }
    }

    /// Look up a header by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
