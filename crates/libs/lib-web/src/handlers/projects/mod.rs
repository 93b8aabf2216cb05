//! # Project Handlers
//!
//! CRUD and moderation endpoints for crowdfunding projects.
//!
//! Listing supports free-text search over title and creator, plus status
//! and category filters, all applied server-side before pagination.

use crate::listing::{contains_ci, paginate};
use axum::extract::{Extension, Json, Path, Query, State};
use lib_core::{AdminApi, AppError, Ctx, Result};
use lib_utils::validation::{Rule, Schema, Value};
use serde::Deserialize;
use shared::dto::page::{ListQuery, Page};
use shared::dto::auth::MessageResponse;
use shared::dto::project::{
    ModerationAction, Project, ProjectForCreate, ProjectForUpdate, ProjectStatus,
};
use std::sync::Arc;
use tracing::info;

fn create_schema() -> Schema {
    Schema::new()
        .field("title", &[Rule::Required, Rule::MinLen(3), Rule::MaxLen(120)])
        .field("user_id", &[Rule::Required])
        .field("subcategory_id", &[Rule::Required])
        .field("description", &[Rule::Required, Rule::MaxLen(2000)])
        .field("funding_goal", &[Rule::Positive])
}

fn update_schema() -> Schema {
    Schema::new()
        .field("title", &[Rule::MinLen(3), Rule::MaxLen(120)])
        .field("description", &[Rule::MaxLen(2000)])
        .field("funding_goal", &[Rule::Positive])
}

/// List projects with search, filters, and pagination.
pub async fn list(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Project>>> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<ProjectStatus>)
        .transpose()
        .map_err(AppError::InvalidInput)?;

    let mut projects = api.list_projects(&ctx).await?;

    if let Some(q) = &query.q {
        projects.retain(|p| contains_ci(&p.title, q) || contains_ci(&p.creator, q));
    }
    if let Some(status) = status {
        projects.retain(|p| p.status == status);
    }
    if let Some(category) = &query.category {
        projects.retain(|p| p.category.eq_ignore_ascii_case(category));
    }

    Ok(Json(paginate(projects, &query)))
}

/// Fetch one project.
pub async fn get(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Path(id): Path<String>,
) -> Result<Json<Project>> {
    Ok(Json(api.get_project(&ctx, &id).await?))
}

/// Create a project.
pub async fn create(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Json(req): Json<ProjectForCreate>,
) -> Result<Json<Project>> {
    create_schema()
        .validate(&|field| match field {
            "title" => Value::Str(&req.title),
            "user_id" => Value::Str(&req.user_id),
            "subcategory_id" => Value::Str(&req.subcategory_id),
            "description" => Value::Str(&req.description),
            "funding_goal" => Value::Num(req.funding_goal),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!("[PROJECTS] Creating project: {}", req.title);
    Ok(Json(api.create_project(&ctx, &req).await?))
}

/// Update a project; only provided fields change.
pub async fn update(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Path(id): Path<String>,
    Json(req): Json<ProjectForUpdate>,
) -> Result<Json<Project>> {
    update_schema()
        .validate(&|field| match field {
            "title" => req.title.as_deref().map(Value::Str).unwrap_or(Value::Missing),
            "description" => req
                .description
                .as_deref()
                .map(Value::Str)
                .unwrap_or(Value::Missing),
            "funding_goal" => req.funding_goal.map(Value::Num).unwrap_or(Value::Missing),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!("[PROJECTS] Updating project {}", id);
    Ok(Json(api.update_project(&ctx, &id, &req).await?))
}

/// Delete a project.
pub async fn delete(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    info!("[PROJECTS] Deleting project {}", id);
    api.delete_project(&ctx, &id).await?;

    Ok(Json(MessageResponse {
        message: format!("Project {} deleted", id),
    }))
}

/// Moderation body; the action is parsed here so unknown actions report a
/// 400 with the offending value.
#[derive(Debug, Deserialize)]
pub struct ModerationBody {
    pub action: String,
}

/// Moderate a project: approve, reject, or suspend.
pub async fn moderate(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Path(id): Path<String>,
    Json(body): Json<ModerationBody>,
) -> Result<Json<Project>> {
    let action: ModerationAction = body.action.parse().map_err(AppError::InvalidInput)?;

    info!("[PROJECTS] Moderating project {}: {}", id, action);
    Ok(Json(api.moderate_project(&ctx, &id, action).await?))
}
