//! In-memory response description handed to the HTTP layer.

use axum::body::Bytes;
use axum::http::{header, HeaderName, HeaderValue, StatusCode};

use super::throttle::ThrottlePolicy;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const NOT_FOUND_BODY: &str = "use /slow-json or /long-json for more fun";

/// Status, ordered headers, body and optional throttle for one request.
///
/// Created fresh per request; the HTTP layer consumes it.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: StatusCode,
    pub headers: Vec<(HeaderName, HeaderValue)>,
    pub body: Bytes,
    pub throttle: Option<ThrottlePolicy>,
}

impl CannedResponse {
    /// `200` JSON response that must not be cached.
    pub fn json(body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::OK,
            headers: vec![
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                ),
                (header::CACHE_CONTROL, HeaderValue::from_static("no-cache")),
            ],
            body: body.into(),
            throttle: None,
        }
    }

    /// Plain-text response with the given status.
    pub fn text(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            headers: vec![(
                header::CONTENT_TYPE,
                HeaderValue::from_static(TEXT_CONTENT_TYPE),
            )],
            body: Bytes::from_static(body.as_bytes()),
            throttle: None,
        }
    }

    /// Catch-all for unknown paths.
    pub fn not_found() -> Self {
        Self::text(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
    }

    pub fn internal_error() -> Self {
        Self::text(StatusCode::INTERNAL_SERVER_ERROR, "failed to render response")
    }

    pub fn with_throttle(mut self, policy: ThrottlePolicy) -> Self {
        self.throttle = Some(policy);
        self
    }
}

#[cfg(test)]
impl CannedResponse {
    /// First header value with the given name.
    pub fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}
