//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router; every path and method reaches the chat handler
//! - Wire up middleware (tracing, timeout, request ID, CORS origin on every reply)
//! - Enforce the request body limit
//! - Serve until a signal or a `Shutdown` trigger

use std::io;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    response::Response,
    routing::any,
    Router,
};
use http_body_util::LengthLimitError;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::chat::{self, ErrorBody};
use crate::config::ServiceConfig;
use crate::gateway::{cors, json, ApiResponse};
use crate::http::request::{self, UuidRequestId};
use crate::http::response::into_http_response;
use crate::lifecycle::signals;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

/// HTTP front for the chat handler.
pub struct HttpServer {
    router: Router,
    config: Arc<ServiceConfig>,
}

impl HttpServer {
    pub fn new(config: ServiceConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(chat_endpoint))
            .route("/{*path}", any(chat_endpoint))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            // Replies produced by middleware (e.g. 408) skip the handler's CORS headers.
            .layer(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static(cors::ANY_ORIGIN),
            ))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for serving or in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Serve on `listener` until an OS signal or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::wait_for_signal() => {}
                    _ = shutdown.recv() => tracing::info!("Shutdown requested"),
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Adapts an HTTP request to the gateway contract and back.
async fn chat_endpoint(State(state): State<AppState>, req: Request<Body>) -> Response {
    let (parts, body) = req.into_parts();
    let limit = state.config.limits.max_body_size;

    let bytes = match axum::body::to_bytes(body, limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            let inner = e.into_inner();
            return if inner.is::<LengthLimitError>() {
                tracing::warn!(limit, "Request body exceeds limit");
                error_response(413, "Request body too large")
            } else {
                tracing::warn!(error = %inner, "Failed to read request body");
                error_response(400, "Failed to read request body")
            };
        }
    };

    tracing::debug!(
        method = %parts.method,
        path = %parts.uri.path(),
        body_len = bytes.len(),
        "Dispatching to chat handler"
    );

    let api_request = request::to_api_request(&parts.method, &bytes);
    into_http_response(chat::handle(&api_request))
}

/// JSON error reply for failures before the handler runs.
fn error_response(status_code: u16, message: &str) -> Response {
    let body = json::to_string(&ErrorBody::new(message))
        .unwrap_or_else(|_| format!(r#"{{"error": "{message}"}}"#));
    into_http_response(ApiResponse::new(status_code, cors::json_headers(), body))
}
