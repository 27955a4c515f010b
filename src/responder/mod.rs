//! Request responder.
//!
//! # Data Flow
//! ```text
//! request path
//!     → routes.rs (exact-match lookup)
//!     → fixtures.rs (render body, reading ValueSource)
//!     → CannedResponse { status, headers, body, throttle }
//!     → http layer (serialize, pace body)
//! ```
//!
//! # Design Decisions
//! - Stateless per call; safe to share across connections without locks
//! - Time and random identifiers are injected through `ValueSource`
//! - Unknown paths are never an error, they get the 404 text body

pub mod fixtures;
pub mod response;
pub mod routes;
pub mod source;
pub mod throttle;

use std::sync::Arc;

pub use response::CannedResponse;
pub use routes::{Route, LONG_JSON_PATH, SLOW_JSON_PATH};
pub use source::{SystemSource, ValueSource};
pub use throttle::ThrottlePolicy;

/// Label for paths outside the route table.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Dispatcher from request path to canned response.
#[derive(Clone)]
pub struct Responder {
    source: Arc<dyn ValueSource>,
}

impl Responder {
    pub fn new(source: Arc<dyn ValueSource>) -> Self {
        Self { source }
    }

    /// Build the response for `path` (query string excluded).
    pub fn handle(&self, path: &str) -> CannedResponse {
        self.dispatch(path).1
    }

    /// Like [`Responder::handle`], also returning the matched route's label
    /// (`"unmatched"` for the 404 branch).
    pub fn dispatch(&self, path: &str) -> (&'static str, CannedResponse) {
        let Some(route) = routes::lookup(path) else {
            return (UNMATCHED_ROUTE, CannedResponse::not_found());
        };

        let response = match (route.build)(self.source.as_ref()) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(route = route.name, error = %e, "Failed to render canned body");
                CannedResponse::internal_error()
            }
        };
        (route.name, response)
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Arc::new(SystemSource::new()))
    }
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder").finish_non_exhaustive()
    }
}
