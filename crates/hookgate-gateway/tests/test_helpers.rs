//! Shared test helpers: AppState factories and a oneshot router call.
#![allow(dead_code)] // helpers used across multiple test crates

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use hookgate_gateway::{create_router, AppState};
use hookgate_runtime::HookRegistry;

/// Built-in stages with enrichment on
pub fn make_test_state() -> AppState {
    AppState::new(HookRegistry::with_builtin(true))
}

/// Built-in stages, loggers only
pub fn make_plain_test_state() -> AppState {
    AppState::new(HookRegistry::with_builtin(false))
}

/// Response pieces the tests care about
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Send one request through a fresh router built from `state`.
pub async fn send(state: AppState, req: Request<Body>) -> TestResponse {
    let app = create_router(state);
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = resp
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();
    TestResponse {
        status,
        content_type,
        body,
    }
}

/// POST raw bytes to `uri`
pub async fn post(state: AppState, uri: &str, body: impl Into<Body>) -> TestResponse {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    send(state, req).await
}
