//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     ServerConfig → bind listener → spawn axum server → ServerHandle
//!
//! Shutdown:
//!     signals.rs (SIGTERM/SIGINT) → ServerHandle::shutdown → drain → exit 0
//! ```

pub mod signals;
pub mod startup;

pub use startup::{start, start_with, ServerHandle};
