//! Throttled canned-JSON HTTP server for exercising HTTP clients against slow
//! response bodies.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod responder;

pub use config::ServerConfig;
pub use error::{ServerError, ThrottleError};
pub use http::HttpServer;
pub use lifecycle::{start, ServerHandle};
pub use responder::{CannedResponse, Responder, ThrottlePolicy, ValueSource};
