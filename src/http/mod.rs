//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, request ID, trace span)
//!     → responder::Responder::handle(path)
//!     → response.rs (status, headers, Content-Length)
//!     → pacing.rs (throttled body stream)
//!     → Send to client
//! ```

pub mod pacing;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer, X_REQUEST_ID};
