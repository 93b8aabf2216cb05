//! # Settings Handlers
//!
//! Site settings, one update endpoint per section so a save in one tab
//! never clobbers another. API key generation returns the secret exactly
//! once; `GET /api/settings` lists keys without it.

use axum::extract::{Extension, Json, Path, State};
use lib_core::{AdminApi, AppError, Ctx, Result};
use lib_utils::validation::{Rule, Schema, Value};
use shared::dto::auth::MessageResponse;
use shared::dto::settings::{
    ApiKey, ApiKeyForCreate, ApiSettings, EmailSettings, GeneralSettings, SecuritySettings,
    Settings,
};
use std::sync::Arc;
use tracing::info;

fn general_schema() -> Schema {
    Schema::new()
        .field("site_name", &[Rule::Required, Rule::MaxLen(100)])
        .field("featured_projects", &[Rule::Range(0.0, 50.0)])
        .field("projects_per_page", &[Rule::Range(1.0, 100.0)])
}

fn email_schema() -> Schema {
    Schema::new()
        .field("from_name", &[Rule::Required, Rule::MaxLen(100)])
        .field("from_email", &[Rule::Required, Rule::Email])
        .field("smtp_port", &[Rule::Range(1.0, 65535.0)])
}

fn security_schema() -> Schema {
    Schema::new()
        .field("password_expiry_days", &[Rule::Range(0.0, 365.0)])
        .field("max_login_attempts", &[Rule::Range(1.0, 20.0)])
        .field("session_timeout_minutes", &[Rule::Range(5.0, 1440.0)])
        .field("min_password_length", &[Rule::Range(6.0, 128.0)])
}

fn api_schema() -> Schema {
    Schema::new().field("rate_limit", &[Rule::Range(1.0, 10_000.0)])
}

fn api_key_schema() -> Schema {
    Schema::new().field("name", &[Rule::Required, Rule::MinLen(3), Rule::MaxLen(60)])
}

/// Fetch the full settings document. API key secrets are never included.
pub async fn get(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
) -> Result<Json<Settings>> {
    Ok(Json(api.get_settings(&ctx).await?))
}

/// Replace the general settings section.
pub async fn update_general(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Json(req): Json<GeneralSettings>,
) -> Result<Json<GeneralSettings>> {
    general_schema()
        .validate(&|field| match field {
            "site_name" => Value::Str(&req.site_name),
            "featured_projects" => Value::Num(req.featured_projects as f64),
            "projects_per_page" => Value::Num(req.projects_per_page as f64),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!("[SETTINGS] Updating general settings");
    Ok(Json(api.update_general_settings(&ctx, &req).await?))
}

/// Replace the email settings section.
pub async fn update_email(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Json(req): Json<EmailSettings>,
) -> Result<Json<EmailSettings>> {
    email_schema()
        .validate(&|field| match field {
            "from_name" => Value::Str(&req.from_name),
            "from_email" => Value::Str(&req.from_email),
            "smtp_port" => Value::Num(req.smtp_port as f64),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!("[SETTINGS] Updating email settings");
    Ok(Json(api.update_email_settings(&ctx, &req).await?))
}

/// Replace the security settings section.
pub async fn update_security(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Json(req): Json<SecuritySettings>,
) -> Result<Json<SecuritySettings>> {
    security_schema()
        .validate(&|field| match field {
            "password_expiry_days" => Value::Num(req.password_expiry_days as f64),
            "max_login_attempts" => Value::Num(req.max_login_attempts as f64),
            "session_timeout_minutes" => Value::Num(req.session_timeout_minutes as f64),
            "min_password_length" => Value::Num(req.min_password_length as f64),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!("[SETTINGS] Updating security settings");
    Ok(Json(api.update_security_settings(&ctx, &req).await?))
}

/// Replace the API settings section.
pub async fn update_api(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Json(req): Json<ApiSettings>,
) -> Result<Json<ApiSettings>> {
    api_schema()
        .validate(&|field| match field {
            "rate_limit" => Value::Num(req.rate_limit as f64),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!("[SETTINGS] Updating API settings");
    Ok(Json(api.update_api_settings(&ctx, &req).await?))
}

/// Generate a new API key. The response is the only place the secret ever
/// appears.
pub async fn generate_key(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Json(req): Json<ApiKeyForCreate>,
) -> Result<Json<ApiKey>> {
    api_key_schema()
        .validate(&|field| match field {
            "name" => Value::Str(&req.name),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!("[SETTINGS] Generating API key: {}", req.name);
    Ok(Json(api.generate_api_key(&ctx, &req.name).await?))
}

/// Revoke an API key.
pub async fn revoke_key(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    info!("[SETTINGS] Revoking API key {}", id);
    api.revoke_api_key(&ctx, &id).await?;

    Ok(Json(MessageResponse {
        message: format!("API key {} revoked", id),
    }))
}
