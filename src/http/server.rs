//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum Router with a single catch-all dispatcher
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener until shutdown is signalled

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::observability::metrics;
use crate::responder::Responder;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Application state injected into the dispatcher.
#[derive(Clone, Debug)]
pub struct AppState {
    pub responder: Responder,
}

/// HTTP front end for the responder.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(responder: Responder) -> Self {
        let router = Self::build_router(AppState { responder });
        Self { router }
    }

    /// Router serving every method and path through the responder.
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    #[cfg(test)]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on `listener` until `shutdown` fires or its sender is dropped.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Per-request dispatcher: path in, canned response out.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");
    let path = request.uri().path();

    let (route, response) = state.responder.dispatch(path);
    let body_len = response.body.len();

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        path = %path,
        route,
        status = response.status.as_u16(),
        body_len,
        bytes_per_period = response.throttle.map(|t| t.bytes_per_period()),
        delivery = ?response.throttle.map(|t| t.total_delay(body_len)),
        "Dispatching canned response"
    );
    metrics::record_response(route, response.status.as_u16(), body_len);

    response.into_response()
}
