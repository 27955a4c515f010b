//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → CLI overrides (--port)
//!     → ServerConfig (immutable)
//!     → lifecycle::start
//! ```
//!
//! # Design Decisions
//! - Only the listening port is configurable from the command line
//! - All fields have defaults so an empty config is valid

pub mod schema;

pub use schema::{ListenerConfig, ObservabilityConfig, ServerConfig, DEFAULT_PORT};
