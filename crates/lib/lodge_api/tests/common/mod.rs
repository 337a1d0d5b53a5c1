//! Shared helpers for router tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use lodge_api::config::ApiConfig;
use lodge_api::{AppState, router};
use lodge_core::auth::bootstrap::SeedAdmin;
use serde_json::Value;
use tower::ServiceExt;

pub const SEED_EMAIL: &str = "admin@example.com";
pub const SEED_PASSWORD: &str = "S3cret!";
pub const JWT_SECRET: &str = "test-secret";

pub fn test_config() -> ApiConfig {
    ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        pg_connection_url: String::new(),
        jwt_secret: JWT_SECRET.into(),
        seed_admin: SeedAdmin::from_parts(Some(SEED_EMAIL.into()), Some(SEED_PASSWORD.into())),
        cors_origins: Vec::new(),
    }
}

pub fn app_with_config(config: ApiConfig) -> Router {
    router(AppState::in_memory(config))
}

pub fn app_with_state() -> (Router, AppState) {
    let state = AppState::in_memory(test_config());
    (router(state.clone()), state)
}

pub fn app() -> Router {
    app_with_state().0
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("parse JSON")
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn get_with_bearer(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::get(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}
