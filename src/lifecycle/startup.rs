//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: a bind error is returned to the caller, never retried
//! - The server runs on its own task; the returned handle owns its shutdown

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::http::HttpServer;
use crate::responder::Responder;

/// Running server. Dropping the handle also stops the server.
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: broadcast::Sender<()>,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl ServerHandle {
    /// Address actually bound (resolves port `0`).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    /// Stop accepting connections, let in-flight responses finish, then join.
    pub async fn shutdown(self) -> Result<(), ServerError> {
        let _ = self.shutdown.send(());
        self.wait().await
    }

    /// Join the server task without signalling it.
    pub async fn wait(self) -> Result<(), ServerError> {
        let ServerHandle {
            task,
            shutdown: _shutdown,
            ..
        } = self;
        task.await??;
        Ok(())
    }
}

/// Bind the configured address and start serving with the system value source.
pub async fn start(config: ServerConfig) -> Result<ServerHandle, ServerError> {
    start_with(config, Responder::default()).await
}

/// Like [`start`], with a caller-supplied responder.
pub async fn start_with(
    config: ServerConfig,
    responder: Responder,
) -> Result<ServerHandle, ServerError> {
    let addr = config.listener.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listener bound");

    let (shutdown, shutdown_rx) = broadcast::channel(1);
    let server = HttpServer::new(responder);
    let task = tokio::spawn(server.run(listener, shutdown_rx));

    Ok(ServerHandle {
        local_addr,
        shutdown,
        task,
    })
}
