//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use playgen_server::{build_router, default_state, ServerConfig};
use playgen_storage::PlaylistStore;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Create a test app around a seeded store
pub fn create_test_app() -> (Router, Arc<PlaylistStore>) {
    create_test_app_with(PlaylistStore::seeded(), ServerConfig::default())
}

/// Create a test app around an empty store
pub fn create_empty_app() -> (Router, Arc<PlaylistStore>) {
    create_test_app_with(PlaylistStore::new(), ServerConfig::default())
}

pub fn create_test_app_with(store: PlaylistStore, config: ServerConfig) -> (Router, Arc<PlaylistStore>) {
    let store = Arc::new(store);
    let app = build_router(default_state(Arc::clone(&store), config)).unwrap();
    (app, store)
}

/// Send a request and return status plus parsed JSON body (Null when empty)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::DELETE, uri, None).await
}
