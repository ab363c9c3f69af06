//! Observability subsystem.
//!
//! Only structured logging: `tracing` events from the handler and server,
//! plus per-request spans from `tower_http::trace`.

pub mod logging;
