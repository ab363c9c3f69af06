//! Gateway-facing types.
//!
//! # Data Flow
//! ```text
//! gateway invocation (or HTTP adapter)
//!     → event.rs (ApiRequest)
//!     → chat handler
//!     → cors.rs (header sets) + json.rs (body encoding)
//!     → event.rs (ApiResponse)
//! ```

pub mod cors;
pub mod event;
pub mod json;

pub use event::{ApiRequest, ApiResponse};
