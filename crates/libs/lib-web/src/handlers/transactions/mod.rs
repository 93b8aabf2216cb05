//! # Transaction Handlers
//!
//! Read-only listing of pledges. Search matches the transaction reference,
//! project title, and backer name.

use crate::listing::{contains_ci, paginate};
use axum::extract::{Extension, Json, Query, State};
use lib_core::{AdminApi, AppError, Ctx, Result};
use shared::dto::page::{ListQuery, Page};
use shared::dto::transaction::{Transaction, TransactionStatus};
use std::sync::Arc;

/// List transactions with search, status filter, and pagination.
pub async fn list(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Transaction>>> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<TransactionStatus>)
        .transpose()
        .map_err(AppError::InvalidInput)?;

    let mut transactions = api.list_transactions(&ctx).await?;

    if let Some(q) = &query.q {
        transactions.retain(|t| {
            contains_ci(&t.id, q) || contains_ci(&t.project, q) || contains_ci(&t.backer, q)
        });
    }
    if let Some(status) = status {
        transactions.retain(|t| t.status == status);
    }

    Ok(Json(paginate(transactions, &query)))
}
