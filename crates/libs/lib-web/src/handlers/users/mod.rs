//! # User Handlers
//!
//! CRUD endpoints for platform users (creators and backers). Search matches
//! name and email; the status filter takes an account standing.

use crate::listing::{contains_ci, paginate};
use axum::extract::{Extension, Json, Path, Query, State};
use lib_core::{AdminApi, AppError, Ctx, Result};
use lib_utils::validation::{Rule, Schema, Value};
use shared::dto::auth::MessageResponse;
use shared::dto::page::{ListQuery, Page};
use shared::dto::user::{AccountStatus, User, UserForCreate, UserForUpdate};
use std::sync::Arc;
use tracing::info;

fn create_schema() -> Schema {
    Schema::new()
        .field("name", &[Rule::Required, Rule::MinLen(2), Rule::MaxLen(80)])
        .field("email", &[Rule::Required, Rule::Email])
}

fn update_schema() -> Schema {
    Schema::new()
        .field("name", &[Rule::MinLen(2), Rule::MaxLen(80)])
        .field("email", &[Rule::Email])
}

/// List users with search, status filter, and pagination.
pub async fn list(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<User>>> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<AccountStatus>)
        .transpose()
        .map_err(AppError::InvalidInput)?;

    let mut users = api.list_users(&ctx).await?;

    if let Some(q) = &query.q {
        users.retain(|u| contains_ci(&u.name, q) || contains_ci(&u.email, q));
    }
    if let Some(status) = status {
        users.retain(|u| u.status == status);
    }

    Ok(Json(paginate(users, &query)))
}

/// Fetch one user.
pub async fn get(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    Ok(Json(api.get_user(&ctx, &id).await?))
}

/// Create a user.
pub async fn create(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Json(req): Json<UserForCreate>,
) -> Result<Json<User>> {
    create_schema()
        .validate(&|field| match field {
            "name" => Value::Str(&req.name),
            "email" => Value::Str(&req.email),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!("[USERS] Creating user: {}", req.email);
    Ok(Json(api.create_user(&ctx, &req).await?))
}

/// Update a user; only provided fields change.
pub async fn update(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Path(id): Path<String>,
    Json(req): Json<UserForUpdate>,
) -> Result<Json<User>> {
    update_schema()
        .validate(&|field| match field {
            "name" => req.name.as_deref().map(Value::Str).unwrap_or(Value::Missing),
            "email" => req.email.as_deref().map(Value::Str).unwrap_or(Value::Missing),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!("[USERS] Updating user {}", id);
    Ok(Json(api.update_user(&ctx, &id, &req).await?))
}

/// Delete a user.
pub async fn delete(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    info!("[USERS] Deleting user {}", id);
    api.delete_user(&ctx, &id).await?;

    Ok(Json(MessageResponse {
        message: format!("User {} deleted", id),
    }))
}

#[cfg(test)]
mod tests;
