#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use rulecheck_api::config::{CorsOrigins, LogFormat, ServerConfig};
use rulecheck_api::router::build_app_router;
use rulecheck_api::state::AppState;
use rulecheck_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and no run-history database.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::List(vec![HeaderValue::from_static("http://localhost:5173")]),
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        max_rules: 1000,
        database_url: None,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router with the production middleware stack.
///
/// Returns the event bus too so tests can observe published run records.
pub fn build_test_app_with(config: ServerConfig) -> (Router, Arc<EventBus>) {
    let event_bus = Arc::new(EventBus::default());
    let state = AppState {
        config: Arc::new(config.clone()),
        event_bus: Arc::clone(&event_bus),
        pool: None,
    };
    (build_app_router(state, &config), event_bus)
}

pub fn build_test_app() -> Router {
    build_test_app_with(test_config()).0
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, Some("application/json"), body.to_string()).await
}

/// POST an arbitrary body, optionally with a content type.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.into())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
