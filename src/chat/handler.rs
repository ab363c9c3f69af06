//! Chat request handler.
//!
//! # Behavior
//! - `OPTIONS`: CORS preflight, empty body
//! - `POST`: canned reply for the `message` field, or 500 on a malformed body
//! - anything else: 405

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::chat::responses::{self, MODEL_NAME, TOKENS_USED};
use crate::gateway::{cors, json, ApiRequest, ApiResponse};

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Reasons a POST body cannot be turned into a reply.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Body is not valid JSON.
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Gateway sent `"body": null`.
    #[error("request body must be a JSON string, not null")]
    NullBody,

    /// Body is valid JSON but not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// `message` is present but not a string.
    #[error("field 'message' must be a string")]
    MessageNotString,
}

/// Successful POST body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub model: String,
    pub tokens_used: u32,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Handle one gateway request using the thread-local RNG.
pub fn handle(request: &ApiRequest) -> ApiResponse {
    handle_with_rng(request, &mut rand::thread_rng())
}

/// Handle one gateway request, drawing randomness from `rng`.
pub fn handle_with_rng<R: Rng + ?Sized>(request: &ApiRequest, rng: &mut R) -> ApiResponse {
    match request.http_method.as_str() {
        "OPTIONS" => {
            tracing::debug!("Answering CORS preflight");
            ApiResponse::new(200, cors::preflight_headers(), String::new())
        }
        "POST" => match post_reply(request, rng) {
            Ok(reply) => {
                tracing::debug!(tokens_used = reply.tokens_used, "Chat reply composed");
                json_response(200, &reply)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Malformed chat request");
                json_response(500, &ErrorBody::new(e.to_string()))
            }
        },
        other => {
            tracing::debug!(method = %other, "Method not allowed");
            json_response(405, &ErrorBody::new(METHOD_NOT_ALLOWED))
        }
    }
}

fn post_reply<R: Rng + ?Sized>(request: &ApiRequest, rng: &mut R) -> Result<ChatReply, ChatError> {
    let body = request.body_or_default().ok_or(ChatError::NullBody)?;
    reply(body, rng)
}

/// Parse a POST body and compose a reply.
pub fn reply<R: Rng + ?Sized>(body: &str, rng: &mut R) -> Result<ChatReply, ChatError> {
    let message = extract_message(body)?;
    // Template and token count are independent draws.
    let response = responses::compose(&message, rng);
    let tokens_used = rng.gen_range(TOKENS_USED);

    Ok(ChatReply {
        response,
        model: MODEL_NAME.to_string(),
        tokens_used,
    })
}

fn extract_message(body: &str) -> Result<String, ChatError> {
    let Value::Object(mut fields) = serde_json::from_str::<Value>(body)? else {
        return Err(ChatError::NotAnObject);
    };

    match fields.remove("message") {
        None => Ok(String::new()),
        Some(Value::String(message)) => Ok(message),
        Some(_) => Err(ChatError::MessageNotString),
    }
}

fn json_response<T: Serialize>(status_code: u16, payload: &T) -> ApiResponse {
    match json::to_string(payload) {
        Ok(body) => ApiResponse::new(status_code, cors::json_headers(), body),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode response body");
            ApiResponse::new(
                500,
                cors::json_headers(),
                r#"{"error": "Failed to encode response"}"#.to_string(),
            )
        }
    }
}
