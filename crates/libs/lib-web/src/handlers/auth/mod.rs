//! # Authentication Handlers
//!
//! Session endpoints for the admin dashboard.
//!
//! Login delegates credential checking to the service layer (upstream API
//! or mock), folds the upstream bearer token into a signed session token,
//! and sets it as an HttpOnly cookie. The cookie is the only session state;
//! logout simply clears it.

use crate::session::{clear_session_cookie, session_cookie};
use axum::extract::{Extension, Json, State};
use axum_extra::extract::cookie::CookieJar;
use lib_auth::encode_session;
use lib_core::{AdminApi, AppError, Config, Ctx, Result};
use lib_utils::validation::{Rule, Schema, Value};
use shared::dto::auth::{LoginRequest, MessageResponse, SessionInfo};
use std::sync::Arc;
use tracing::{debug, info, warn};

fn login_schema() -> Schema {
    Schema::new()
        .field("login", &[Rule::Required])
        .field("password", &[Rule::Required])
}

/// Login handler - authenticates the admin and opens a session.
///
/// # Returns
///
/// * `Ok((jar, SessionInfo))` - session cookie set
/// * `Err(AppError)` - validation failure or rejected credentials
pub async fn login(
    State(api): State<Arc<dyn AdminApi>>,
    State(config): State<Config>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionInfo>)> {
    info!("[LOGIN] Login attempt");
    debug!("   Login: {}", req.login);

    login_schema()
        .validate(&|field| match field {
            "login" => Value::Str(&req.login),
            "password" => Value::Str(&req.password),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    let user = api.login(&req).await.map_err(|e| {
        warn!("[LOGIN] Rejected login for {}: {}", req.login, e);
        e
    })?;

    let token = encode_session(
        &user.id,
        &user.login,
        &user.name,
        &user.role,
        user.token.clone(),
        &config.session_secret,
        config.session_ttl_hours,
    )
    .map_err(AppError::Internal)?;

    info!("[LOGIN] Session opened for {} (id: {})", user.login, user.id);

    let jar = jar.add(session_cookie(token, config.session_ttl_hours));

    Ok((
        jar,
        Json(SessionInfo {
            id: user.id,
            login: user.login,
            name: user.name,
            role: user.role,
        }),
    ))
}

/// Logout handler - clears the session cookie.
///
/// Always succeeds; logging out an already-dead session is a no-op.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    info!("[LOGOUT] Session closed");

    (
        jar.add(clear_session_cookie()),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// Current-session handler.
pub async fn me(Extension(ctx): Extension<Ctx>) -> Json<SessionInfo> {
    Json(SessionInfo {
        id: ctx.admin_id().to_string(),
        login: ctx.login().to_string(),
        name: ctx.name().to_string(),
        role: ctx.role().to_string(),
    })
}

#[cfg(test)]
mod tests;
