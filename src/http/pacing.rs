//! Throttled body delivery.
//!
//! The body is cut into `bytes_per_period` chunks and each chunk is released
//! after waiting one period, so a policy whose chunk covers the whole body
//! degenerates into a single delayed write.

use std::convert::Infallible;

use axum::body::{Body, Bytes};
use futures_util::{stream, Stream, StreamExt};

use crate::responder::ThrottlePolicy;

/// Stream of body chunks released at the policy's rate.
pub fn paced_chunks(body: Bytes, policy: ThrottlePolicy) -> impl Stream<Item = Bytes> + Send + 'static {
    stream::unfold(body, move |mut remaining| async move {
        if remaining.is_empty() {
            return None;
        }
        tokio::time::sleep(policy.period()).await;
        let take = remaining.len().min(policy.bytes_per_period());
        let chunk = remaining.split_to(take);
        Some((chunk, remaining))
    })
}

/// Wrap `body` in a streaming axum body paced by `policy`.
pub fn throttled_body(body: Bytes, policy: ThrottlePolicy) -> Body {
    Body::from_stream(paced_chunks(body, policy).map(Ok::<_, Infallible>))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_chunks_follow_rate() {
        let policy = ThrottlePolicy::new(4, Duration::from_millis(10)).unwrap();
        let start = Instant::now();
        let chunks: Vec<Bytes> = paced_chunks(Bytes::from_static(b"abcdefghij"), policy)
            .collect()
            .await;

        assert_eq!(chunks, vec![
            Bytes::from_static(b"abcd"),
            Bytes::from_static(b"efgh"),
            Bytes::from_static(b"ij"),
        ]);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_whole_body_chunk_is_single_delayed_write() {
        let policy = ThrottlePolicy::new(10, Duration::from_millis(20)).unwrap();
        let start = Instant::now();
        let chunks: Vec<Bytes> = paced_chunks(Bytes::from_static(b"0123456789"), policy)
            .collect()
            .await;

        assert_eq!(chunks.len(), 1);
        assert_eq!(&chunks[0][..], b"0123456789");
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_empty_body_yields_nothing() {
        let policy = ThrottlePolicy::new(1, Duration::from_secs(60)).unwrap();
        let chunks: Vec<Bytes> = paced_chunks(Bytes::new(), policy).collect().await;
        assert!(chunks.is_empty());
    }
}
