//! # Session Middleware
//!
//! Validates the session cookie and injects the authenticated [`Ctx`] into
//! request extensions. Protected routes sit behind this middleware; the 401
//! it raises picks up the session-clearing cookie in `mw_res_map`.

use crate::server::AppState;
use crate::session::token_from_jar;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use lib_auth::decode_session;
use lib_core::{AppError, Ctx};
use tracing::{debug, warn};

/// Session validation middleware.
///
/// Reads the `ss_session` cookie, verifies the signed token, and makes the
/// admin identity available to handlers via `Extension<Ctx>`.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = token_from_jar(&jar).ok_or_else(|| {
        warn!("[SESSION] No session cookie on {}", req.uri().path());
        AppError::Unauthorized("Not authenticated".to_string())
    })?;

    let claims = decode_session(&token, &state.config.session_secret).map_err(|e| {
        warn!("[SESSION] Rejected session token: {}", e);
        AppError::Unauthorized("Session expired or invalid".to_string())
    })?;

    debug!("[SESSION] Authenticated admin: {} (id: {})", claims.login, claims.sub);

    let ctx = Ctx::new(
        claims.sub,
        claims.login,
        claims.name,
        claims.role,
        claims.upstream,
    );
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
