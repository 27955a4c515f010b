//! Shared utilities for integration tests.

use slow_json_server::config::ServerConfig;
use slow_json_server::lifecycle::{self, ServerHandle};

/// Start the server on an ephemeral loopback port.
pub async fn start_server() -> ServerHandle {
    lifecycle::start(ServerConfig::with_port(0))
        .await
        .expect("server should bind an ephemeral port")
}

/// Client without connection pooling or system proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

pub fn url(handle: &ServerHandle, path: &str) -> String {
    format!("http://{}{}", handle.local_addr(), path)
}
