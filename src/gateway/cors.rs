//! CORS header sets attached to gateway responses.

use std::collections::BTreeMap;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const MAX_AGE: &str = "Access-Control-Max-Age";
pub const CONTENT_TYPE: &str = "Content-Type";

pub const ANY_ORIGIN: &str = "*";
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, X-User-Id";
/// Preflight cache lifetime (24h).
pub const PREFLIGHT_MAX_AGE_SECS: u32 = 86_400;
pub const APPLICATION_JSON: &str = "application/json";

/// Headers for a preflight (OPTIONS) reply.
pub fn preflight_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (ALLOW_ORIGIN.to_string(), ANY_ORIGIN.to_string()),
        (ALLOW_METHODS.to_string(), ALLOWED_METHODS.to_string()),
        (ALLOW_HEADERS.to_string(), ALLOWED_HEADERS.to_string()),
        (MAX_AGE.to_string(), PREFLIGHT_MAX_AGE_SECS.to_string()),
    ])
}

/// Headers for every JSON reply.
pub fn json_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
        (ALLOW_ORIGIN.to_string(), ANY_ORIGIN.to_string()),
    ])
}
