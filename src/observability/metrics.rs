//! Metrics collection.
//!
//! # Metrics
//! - `canned_responses_total` (counter): responses by route and status
//! - `canned_response_body_bytes` (histogram): body size by route
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! host process installs a recorder.

/// Record one dispatched response.
pub fn record_response(route: &'static str, status: u16, body_len: usize) {
    ::metrics::counter!(
        "canned_responses_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("canned_response_body_bytes", "route" => route).record(body_len as f64);
}
