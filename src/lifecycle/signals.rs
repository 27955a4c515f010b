//! OS signal handling.
//!
//! Handlers are installed by [`ShutdownSignal::register`], so a signal that
//! arrives before anything awaits it is still delivered as a graceful stop.

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Registered SIGINT/SIGTERM listeners (Ctrl+C elsewhere).
#[derive(Debug)]
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
}

impl ShutdownSignal {
    /// Install the handlers now.
    pub fn register() -> std::io::Result<Self> {
        #[cfg(unix)]
        {
            Ok(Self {
                interrupt: signal(SignalKind::interrupt())?,
                terminate: signal(SignalKind::terminate())?,
            })
        }

        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

    /// Resolve once the process is asked to stop.
    #[cfg_attr(not(unix), allow(unused_mut))]
    pub async fn recv(mut self) -> std::io::Result<()> {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = self.interrupt.recv() => {}
                _ = self.terminate.recv() => {}
            }
        }

        #[cfg(not(unix))]
        tokio::signal::ctrl_c().await?;

        tracing::info!("Shutdown signal received");
        Ok(())
    }
}
