//! # Session Lifecycle Tests

use super::*;
use axum::http::StatusCode;

#[tokio::test]
async fn test_me_without_cookie_is_unauthorized() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("401 should clear the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_me_with_valid_session() {
    let app = test_app();

    let login_response = do_login(app.clone(), "admin", "admin123").await;
    let cookie = session_pair(&login_response);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["login"], "admin");
    assert_eq!(body["name"], "Admin User");
}

#[tokio::test]
async fn test_tampered_cookie_rejected() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::COOKIE, "ss_session=not-a-real-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("logout should clear the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("ss_session="));
    assert!(cookie.contains("Max-Age=0"));

    let body = read_json(response).await;
    assert_eq!(body["message"], "Logged out");
}
