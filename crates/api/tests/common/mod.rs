#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use radio_api::config::ServerConfig;
use radio_api::router::build_app_router;
use radio_api::state::AppState;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(media_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_root: media_root.to_path_buf(),
        listener_sample_secs: 5,
    }
}

/// State backed by `pool`, with media resolved under the system temp dir.
pub fn test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, test_config(&std::env::temp_dir()))
}

/// Build the full application router (same middleware stack as production).
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_router(test_state(pool))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Body::from(body.to_string()),
        Some("application/json"),
    )
    .await
}

/// POST an arbitrary body, e.g. malformed JSON.
pub async fn post_raw(
    app: Router,
    uri: &str,
    body: &'static str,
    content_type: Option<&str>,
) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body), content_type).await
}

/// POST with an explicit `X-Forwarded-For`, so likes come from a known listener.
pub async fn post_as(app: Router, uri: &str, listener: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("x-forwarded-for", listener)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Insert a track through the API and return its id.
pub async fn create_track(app: Router, title: &str, file_path: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/tracks",
        serde_json::json!({
            "title": title,
            "mood": "synthwave",
            "file_path": file_path,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
