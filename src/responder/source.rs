//! Injected sources for the per-request dynamic fields.
//!
//! Canned bodies are fixed except for a timestamp and a handful of random
//! identifiers. Both come through [`ValueSource`] so tests can substitute
//! deterministic values.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Capability for "current time" and "random identifier".
pub trait ValueSource: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;

    /// A fresh random identifier.
    fn random_id(&self) -> Uuid;
}

/// Production source backed by the system clock and UUID v4.
///
/// Timestamps never go backwards across calls on the same instance, even if
/// the wall clock is stepped back.
#[derive(Debug, Default)]
pub struct SystemSource {
    last_millis: AtomicU64,
}

impl SystemSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueSource for SystemSource {
    fn now_millis(&self) -> u64 {
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        let previous = self.last_millis.fetch_max(wall, Ordering::Relaxed);
        previous.max(wall)
    }

    fn random_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
