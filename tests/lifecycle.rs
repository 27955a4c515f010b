//! Startup and shutdown behaviour.

use slow_json_server::config::ServerConfig;
use slow_json_server::lifecycle;
use slow_json_server::ServerError;

mod common;

#[tokio::test]
async fn test_bind_failure_is_reported() {
    let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = occupied.local_addr().unwrap().port();

    let err = lifecycle::start(ServerConfig::with_port(port))
        .await
        .expect_err("port is already taken");

    match err {
        ServerError::Bind { addr, .. } => assert_eq!(addr.port(), port),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let server = common::start_server().await;
    let url = common::url(&server, "/nonexistent");
    let client = common::client();

    let res = client.get(&url).send().await.unwrap();
    assert_eq!(res.status(), 404);

    server.shutdown().await.unwrap();

    assert!(client.get(&url).send().await.is_err());
}

#[tokio::test]
async fn test_ephemeral_port_is_resolved() {
    let server = common::start_server().await;
    assert_ne!(server.port(), 0);
    assert!(server.local_addr().ip().is_loopback());
    server.shutdown().await.unwrap();
}
