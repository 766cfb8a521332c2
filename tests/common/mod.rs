#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use highscores::{
    app::build_app,
    config::{AppConfig, JwtConfig},
    state::AppState,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        jwt: JwtConfig {
            secret: "integration-secret".into(),
            issuer: "highscores".into(),
            audience: "highscores-players".into(),
            ttl_minutes: 60,
        },
        enforce_unique_handles: false,
    }
}

pub fn setup_test_app() -> (Router, AppState) {
    setup_test_app_with(test_config())
}

pub fn setup_test_app_with(config: AppConfig) -> (Router, AppState) {
    let state = AppState::new(config);
    (build_app(state.clone()), state)
}

/// Scores stored for `level`, as returned by the first page of the public query.
pub async fn scores_for_level(app: &Router, level: &str) -> Vec<Value> {
    let (status, body) = send(app, get(&format!("/high-scores?level={level}"))).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().cloned().unwrap_or_default()
}

/// Run one request and decode the JSON body (`Null` when empty or not JSON).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn post_json(uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn register_and_login(app: &Router, handle: &str, password: &str) -> String {
    let creds = json!({ "userHandle": handle, "password": password });
    let (status, _) = send(app, post_json("/signup", &creds, None)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app, post_json("/login", &creds, None)).await;
    assert_eq!(status, StatusCode::OK);
    body["jsonWebToken"]
        .as_str()
        .expect("login returns a token")
        .to_string()
}

pub fn score(level: &str, handle: &str, score: u64, timestamp: &str) -> Value {
    json!({
        "level": level,
        "userHandle": handle,
        "score": score,
        "timestamp": timestamp,
    })
}
