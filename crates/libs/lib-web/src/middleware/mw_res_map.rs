//! # Response Mapping Middleware
//!
//! Final response pass. Any 401 leaving the service carries the
//! session-clearing cookie, so a dead session is removed from the browser
//! no matter which layer rejected the request.

use crate::session::clear_session_cookie;
use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error};

/// Response mapping middleware.
pub async fn map_res(req: Request, next: Next) -> Response {
    let mut res = next.run(req).await;

    if res.status() == StatusCode::UNAUTHORIZED {
        debug!("[RES_MAP] 401 response, clearing session cookie");
        if let Ok(value) = HeaderValue::from_str(&clear_session_cookie().to_string()) {
            res.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    if res.status().is_server_error() {
        error!("[RES_MAP] Server error: {}", res.status());
    }

    res
}
