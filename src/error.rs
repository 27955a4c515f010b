//! Error types shared across subsystems.

use std::net::SocketAddr;

/// Errors raised while starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listening socket could not be bound (port in use, permission denied).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure after the listener was bound.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The background server task panicked or was cancelled.
    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Invalid throttle parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThrottleError {
    #[error("bytes per period must be at least 1")]
    ZeroBytesPerPeriod,
}
