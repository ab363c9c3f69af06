//! Mock LLM chat endpoint.
//!
//! The core is [`chat::handle`]: a pure function from a gateway request to a
//! gateway response. The rest of the crate runs it as a standalone HTTP
//! service.

pub mod chat;
pub mod config;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use chat::handle;
pub use config::ServiceConfig;
pub use gateway::{ApiRequest, ApiResponse};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
