use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, post};
use axum::Router;
use hookgate_runtime::{parse_object, HookContext, HookEvent, HookRegistry};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::error::InterceptError;

/// 2 MiB
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<HookRegistry>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(registry: HookRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// Create the Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    Router::new()
        .route("/health", any(health_check))
        .route("/before", post(before_hook))
        .route("/after", post(after_hook))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the interceptor server
pub async fn start_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let router = create_router(state);
    let addr = format!("{}:{}", host, port);

    info!(addr = %addr, "Starting interceptor server");
    info!(endpoints = "/health, /before, /after", "Routes registered");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Interceptor server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections..."),
        Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C; serving until killed"),
    }
}

// --- Handlers ---

async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

async fn before_hook(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, InterceptError> {
    intercept(&state, HookEvent::ToolCallBefore, body).await
}

async fn after_hook(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, InterceptError> {
    intercept(&state, HookEvent::ToolCallAfter, body).await
}

/// Shared body of `/before` and `/after`.
///
/// Only a failed body read is reported to the caller. Anything past that point
/// fails open: unparseable bodies, a failing critical hook, or a serialization
/// error all forward the original bytes with 200.
async fn intercept(
    state: &AppState,
    event: HookEvent,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, InterceptError> {
    let body = body.map_err(|r| InterceptError::from_rejection(r, state.max_body_bytes))?;
    let request_id = uuid::Uuid::new_v4().to_string();
    let hook = event.as_str();

    debug!(request_id = %request_id, hook, bytes = body.len(), "Interceptor received payload");

    let original = match parse_object(&body) {
        Ok(map) => Value::Object(map),
        Err(e) => {
            warn!(request_id = %request_id, hook, error = %e, "JSON parse error, passing through");
            return Ok(json_response(body));
        }
    };

    let ctx = HookContext {
        event,
        data: original.clone(),
        request_id: request_id.clone(),
    };

    let output = match state.registry.trigger(ctx).await {
        Ok(output) => output,
        Err(e) => {
            warn!(
                request_id = %request_id,
                hook,
                error = %format!("{:#}", e),
                "Hook pipeline failed, passing through"
            );
            return Ok(json_response(body));
        }
    };

    if output == original {
        return Ok(json_response(body));
    }

    match serde_json::to_vec(&output) {
        Ok(serialized) => Ok(json_response(Bytes::from(serialized))),
        Err(e) => {
            warn!(request_id = %request_id, hook, error = %e, "Failed to serialize payload, passing through");
            Ok(json_response(body))
        }
    }
}

fn json_response(body: Bytes) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
