//! Static route table.
//!
//! Paths are matched exactly and case-sensitively, first match wins. Anything
//! else falls through to the 404 response.

use std::time::Duration;

use super::fixtures;
use super::response::CannedResponse;
use super::source::ValueSource;
use super::throttle::ThrottlePolicy;

pub const SLOW_JSON_PATH: &str = "/slow-json";
pub const LONG_JSON_PATH: &str = "/long-json";

/// `/slow-json` is spread over this many periods.
pub const SLOW_JSON_PERIODS: usize = 20;
pub const SLOW_JSON_PERIOD: Duration = Duration::from_millis(100);
pub const LONG_JSON_PERIOD: Duration = Duration::from_millis(69);

pub type BuildFn = fn(&dyn ValueSource) -> serde_json::Result<CannedResponse>;

/// A path and the function that renders its response.
#[derive(Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    /// Low-cardinality label for logs and metrics.
    pub name: &'static str,
    pub build: BuildFn,
}

pub static ROUTES: &[Route] = &[
    Route {
        path: SLOW_JSON_PATH,
        name: "slow_json",
        build: slow_json,
    },
    Route {
        path: LONG_JSON_PATH,
        name: "long_json",
        build: long_json,
    },
];

/// Find the route for an exact path.
pub fn lookup(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

fn slow_json(source: &dyn ValueSource) -> serde_json::Result<CannedResponse> {
    let body = fixtures::slow_json(source)?;
    let bytes_per_period = body.len() / SLOW_JSON_PERIODS;
    Ok(throttled(
        CannedResponse::json(body),
        bytes_per_period,
        SLOW_JSON_PERIOD,
    ))
}

// The whole body goes out as one chunk after a single period: a flat delay
// rather than incremental streaming.
fn long_json(source: &dyn ValueSource) -> serde_json::Result<CannedResponse> {
    let body = fixtures::long_json(source)?;
    let bytes_per_period = body.len();
    Ok(throttled(
        CannedResponse::json(body),
        bytes_per_period,
        LONG_JSON_PERIOD,
    ))
}

fn throttled(response: CannedResponse, bytes_per_period: usize, period: Duration) -> CannedResponse {
    match ThrottlePolicy::new(bytes_per_period, period) {
        Ok(policy) => response.with_throttle(policy),
        Err(e) => {
            tracing::warn!(
                body_len = response.body.len(),
                bytes_per_period,
                error = %e,
                "Invalid throttle, serving body unthrottled"
            );
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup("/slow-json").map(|r| r.name), Some("slow_json"));
        assert_eq!(lookup("/long-json").map(|r| r.name), Some("long_json"));
        assert!(lookup("/Slow-Json").is_none());
        assert!(lookup("/slow-json/").is_none());
        assert!(lookup("slow-json").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("/").is_none());
    }

    #[test]
    fn test_zero_rate_falls_back_to_unthrottled() {
        let response = throttled(CannedResponse::json("[]"), 0, SLOW_JSON_PERIOD);
        assert!(response.throttle.is_none());
        assert_eq!(&response.body[..], b"[]");
    }
}
