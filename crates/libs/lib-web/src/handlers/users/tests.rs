//! # User Handler Tests

use crate::server::{router, AppState};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use lib_core::{ApiMode, Config, MockApi};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    let state = AppState {
        api: Arc::new(MockApi::seeded()),
        config: Config {
            upstream_url: "http://localhost:4000/api".to_string(),
            session_secret: "test-secret-key-must-be-at-least-32-chars-long!".to_string(),
            session_ttl_hours: 24,
            api_mode: ApiMode::Mock,
            mock_latency_ms: 0,
        },
    };
    router(state, Vec::new())
}

async fn login_cookie(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "login": "admin", "password": "admin123" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set the session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn get_with_cookie(app: &Router, cookie: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn json_with_cookie(
    app: &Router,
    cookie: &str,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::COOKIE, cookie)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_list_requires_session() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_status_filter() {
    let app = test_app();
    let cookie = login_cookie(&app).await;

    let (status, body) = get_with_cookie(&app, &cookie, "/api/users?status=suspended").await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Viktor Hale");
}

#[tokio::test]
async fn test_list_invalid_status_is_bad_request() {
    let app = test_app();
    let cookie = login_cookie(&app).await;

    let (status, body) = get_with_cookie(&app, &cookie, "/api/users?status=banned").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "InvalidInput");
}

#[tokio::test]
async fn test_list_search_matches_email() {
    let app = test_app();
    let cookie = login_cookie(&app).await;

    let (status, body) = get_with_cookie(&app, &cookie, "/api/users?q=jacquelyn@").await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Jacquelyn Benson");
}

#[tokio::test]
async fn test_create_validation_reports_all_fields() {
    let app = test_app();
    let cookie = login_cookie(&app).await;

    let (status, body) = json_with_cookie(
        &app,
        &cookie,
        Method::POST,
        "/api/users",
        json!({ "name": "X", "email": "not-an-email", "role": "backer" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("name"));
    assert!(error.contains("email"));
}

#[tokio::test]
async fn test_update_changes_status_only() {
    let app = test_app();
    let cookie = login_cookie(&app).await;

    let (status, body) = json_with_cookie(
        &app,
        &cookie,
        Method::PUT,
        "/api/users/6",
        json!({ "status": "active" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert_eq!(body["name"], "Viktor Hale");
}

#[tokio::test]
async fn test_delete_then_missing() {
    let app = test_app();
    let cookie = login_cookie(&app).await;

    let (status, body) = json_with_cookie(
        &app,
        &cookie,
        Method::DELETE,
        "/api/users/4",
        json!(null),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User 4 deleted");

    let (status, body) = get_with_cookie(&app, &cookie, "/api/users/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NotFound");
}
