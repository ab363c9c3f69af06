//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! signals.rs: SIGTERM / Ctrl+C ─┐
//!                               ├→ server stops accepting → in-flight requests drain → exit
//! shutdown.rs: trigger() ───────┘
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
