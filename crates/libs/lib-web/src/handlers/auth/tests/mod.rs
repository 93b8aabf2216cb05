//! # Auth Handler Tests
//!
//! Drive the full router (middleware included) with `oneshot` requests
//! against the zero-latency mock service.

mod session;

use crate::server::{router, AppState};
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use lib_core::{ApiMode, Config, MockApi};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

pub(crate) const TEST_SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";

pub(crate) fn test_config() -> Config {
    Config {
        upstream_url: "http://localhost:4000/api".to_string(),
        session_secret: TEST_SECRET.to_string(),
        session_ttl_hours: 24,
        api_mode: ApiMode::Mock,
        mock_latency_ms: 0,
    }
}

pub(crate) fn test_app() -> Router {
    let state = AppState {
        api: Arc::new(MockApi::seeded()),
        config: test_config(),
    };
    router(state, Vec::new())
}

pub(crate) async fn do_login(app: Router, login: &str, password: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "login": login, "password": password }).to_string(),
            ))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Extract the `name=value` pair of the session cookie from a response.
pub(crate) fn session_pair(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

pub(crate) async fn read_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
