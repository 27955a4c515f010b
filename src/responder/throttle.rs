//! Throttle policy attached to a canned response.

use std::num::NonZeroUsize;
use std::time::Duration;

use crate::error::ThrottleError;

/// Rate at which body bytes are released: `bytes_per_period` every `period`.
///
/// Headers are never throttled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottlePolicy {
    bytes_per_period: NonZeroUsize,
    period: Duration,
}

impl ThrottlePolicy {
    /// Create a policy; `bytes_per_period` must be at least 1.
    pub fn new(bytes_per_period: usize, period: Duration) -> Result<Self, ThrottleError> {
        let bytes_per_period =
            NonZeroUsize::new(bytes_per_period).ok_or(ThrottleError::ZeroBytesPerPeriod)?;
        Ok(Self {
            bytes_per_period,
            period,
        })
    }

    pub fn bytes_per_period(&self) -> usize {
        self.bytes_per_period.get()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of periods needed to release `body_len` bytes.
    pub fn periods_for(&self, body_len: usize) -> usize {
        body_len.div_ceil(self.bytes_per_period())
    }

    /// Minimum time to deliver a body of `body_len` bytes.
    pub fn total_delay(&self, body_len: usize) -> Duration {
        let periods = u32::try_from(self.periods_for(body_len)).unwrap_or(u32::MAX);
        self.period.saturating_mul(periods)
    }
}
