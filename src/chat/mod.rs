//! Mock chat endpoint.
//!
//! There is no model behind this endpoint: replies come from a fixed pool of
//! canned texts and the usage numbers are fabricated.

pub mod handler;
pub mod responses;

pub use handler::{handle, handle_with_rng, ChatError, ChatReply, ErrorBody};
