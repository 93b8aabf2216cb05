//! # Category Handlers
//!
//! CRUD endpoints for project categories, plus subcategory creation.
//! Subcategories are embedded in their parent category, so there is no
//! standalone subcategory listing.

use crate::listing::{contains_ci, paginate};
use axum::extract::{Extension, Json, Path, Query, State};
use lib_core::{AdminApi, AppError, Ctx, Result};
use lib_utils::validation::{Rule, Schema, Value};
use shared::dto::auth::MessageResponse;
use shared::dto::category::{
    Category, CategoryForCreate, CategoryForUpdate, Subcategory, SubcategoryForCreate,
};
use shared::dto::page::{ListQuery, Page};
use std::sync::Arc;
use tracing::info;

fn create_schema() -> Schema {
    Schema::new()
        .field("name", &[Rule::Required, Rule::MinLen(2), Rule::MaxLen(60)])
        .field("description", &[Rule::Required, Rule::MaxLen(500)])
}

fn update_schema() -> Schema {
    Schema::new()
        .field("name", &[Rule::MinLen(2), Rule::MaxLen(60)])
        .field("description", &[Rule::MaxLen(500)])
}

fn subcategory_schema() -> Schema {
    Schema::new()
        .field("parent_id", &[Rule::Required])
        .field("name", &[Rule::Required, Rule::MinLen(2), Rule::MaxLen(60)])
        .field("description", &[Rule::MaxLen(500)])
}

/// List categories with search, active filter, and pagination.
///
/// The status filter takes `active` or `inactive`.
pub async fn list(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Category>>> {
    let active = match query.status.as_deref() {
        None => None,
        Some("active") => Some(true),
        Some("inactive") => Some(false),
        Some(other) => {
            return Err(AppError::InvalidInput(format!(
                "Invalid category status: {}",
                other
            )))
        }
    };

    let mut categories = api.list_categories(&ctx).await?;

    if let Some(q) = &query.q {
        categories.retain(|c| contains_ci(&c.name, q) || contains_ci(&c.description, q));
    }
    if let Some(active) = active {
        categories.retain(|c| c.active == active);
    }

    Ok(Json(paginate(categories, &query)))
}

/// Fetch one category, subcategories included.
pub async fn get(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Path(id): Path<String>,
) -> Result<Json<Category>> {
    Ok(Json(api.get_category(&ctx, &id).await?))
}

/// Create a category.
pub async fn create(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Json(req): Json<CategoryForCreate>,
) -> Result<Json<Category>> {
    create_schema()
        .validate(&|field| match field {
            "name" => Value::Str(&req.name),
            "description" => Value::Str(&req.description),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!("[CATEGORIES] Creating category: {}", req.name);
    Ok(Json(api.create_category(&ctx, &req).await?))
}

/// Update a category; only provided fields change.
pub async fn update(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Path(id): Path<String>,
    Json(req): Json<CategoryForUpdate>,
) -> Result<Json<Category>> {
    update_schema()
        .validate(&|field| match field {
            "name" => req.name.as_deref().map(Value::Str).unwrap_or(Value::Missing),
            "description" => req
                .description
                .as_deref()
                .map(Value::Str)
                .unwrap_or(Value::Missing),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!("[CATEGORIES] Updating category {}", id);
    Ok(Json(api.update_category(&ctx, &id, &req).await?))
}

/// Delete a category.
pub async fn delete(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    info!("[CATEGORIES] Deleting category {}", id);
    api.delete_category(&ctx, &id).await?;

    Ok(Json(MessageResponse {
        message: format!("Category {} deleted", id),
    }))
}

/// Create a subcategory under an existing category.
pub async fn create_subcategory(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Json(req): Json<SubcategoryForCreate>,
) -> Result<Json<Subcategory>> {
    subcategory_schema()
        .validate(&|field| match field {
            "parent_id" => Value::Str(&req.parent_id),
            "name" => Value::Str(&req.name),
            "description" => Value::Str(&req.description),
            _ => Value::Missing,
        })
        .map_err(AppError::invalid_fields)?;

    info!(
        "[CATEGORIES] Creating subcategory {} under category {}",
        req.name, req.parent_id
    );
    Ok(Json(api.create_subcategory(&ctx, &req).await?))
}
