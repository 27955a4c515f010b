//! Serialization of canned responses for the client.
//!
//! # Responsibilities
//! - Copy status and declared headers in order
//! - Advertise the full `Content-Length` up front
//! - Pace the body when a throttle policy is attached
//!
//! # Design Decisions
//! - Headers go out immediately, only the body is throttled
//! - Fixed length plus slow delivery is what client timeouts are tested against

use axum::body::Body;
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};

use crate::http::pacing;
use crate::responder::CannedResponse;

impl IntoResponse for CannedResponse {
    fn into_response(self) -> Response {
        let body_len = self.body.len();
        let body = match self.throttle {
            Some(policy) => pacing::throttled_body(self.body, policy),
            None => Body::from(self.body),
        };

        let mut response = Response::new(body);
        *response.status_mut() = self.status;
        let headers = response.headers_mut();
        for (name, value) in self.headers {
            headers.append(name, value);
        }
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(body_len));
        response
    }
}
