//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! dispatcher and lifecycle produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//! ```

pub mod logging;
pub mod metrics;
