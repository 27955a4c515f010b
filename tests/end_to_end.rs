//! End-to-end tests against a live server.

use std::time::{Duration, Instant};

use serde_json::Value;

mod common;

#[tokio::test]
async fn test_long_json_scenario() {
    let server = common::start_server().await;
    let client = common::client();

    let start = Instant::now();
    let res = client
        .get(common::url(&server, "/long-json"))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/json; charset=utf-8");
    assert_eq!(res.headers()["cache-control"], "no-cache");

    let records: Value = res.json().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(60));

    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[2]["favoriteFruit"], "strawberry");
    assert_eq!(records[1]["name"], "Dorsey Cooper");

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_path_scenario() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .get(common::url(&server, "/nonexistent"))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 404);
    assert_eq!(res.headers()["content-type"], "text/plain; charset=utf-8");
    assert!(res.headers().get("cache-control").is_none());
    assert_eq!(
        res.text().await.unwrap(),
        "use /slow-json or /long-json for more fun"
    );

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_slow_json_is_streamed_over_two_seconds() {
    let server = common::start_server().await;
    let client = common::client();

    let start = Instant::now();
    let mut res = client
        .get(common::url(&server, "/slow-json"))
        .send()
        .await
        .expect("server unreachable");
    let headers_after = start.elapsed();

    assert_eq!(res.status(), 200);
    let content_length = res.content_length().expect("fixed-length body");

    let mut body = Vec::new();
    let mut chunks = 0;
    while let Some(chunk) = res.chunk().await.unwrap() {
        chunks += 1;
        body.extend_from_slice(&chunk);
    }
    let body_after = start.elapsed();

    assert!(headers_after < Duration::from_secs(1), "headers are not throttled");
    assert!(body_after >= Duration::from_millis(1900), "took {body_after:?}");
    assert!(chunks > 1, "body arrived in one piece");
    assert_eq!(body.len() as u64, content_length);

    let records: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(records[0]["id"], 4);
    assert_eq!(records[0]["someText"], "883e11ad-0291-44cb-908b-6e18fd9b3888");

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_requests() {
    let server = common::start_server().await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..10 {
        let client = client.clone();
        let path = if i % 2 == 0 { "/long-json" } else { "/missing" };
        let url = common::url(&server, path);
        tasks.push(tokio::spawn(async move {
            let res = client.get(url).send().await.unwrap();
            (res.status().as_u16(), res.bytes().await.unwrap().len())
        }));
    }

    for (i, task) in tasks.into_iter().enumerate() {
        let (status, len) = task.await.unwrap();
        if i % 2 == 0 {
            assert_eq!(status, 200);
            assert!(len > 1000);
        } else {
            assert_eq!(status, 404);
        }
    }

    server.shutdown().await.unwrap();
}
