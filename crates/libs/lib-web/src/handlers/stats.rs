//! # Stats Handlers
//!
//! Dashboard and funding figures, pre-formatted by the service layer.
//! Repeated fetches within the quiet period are served from the remote
//! client's cache.

use axum::extract::{Extension, Json, State};
use lib_core::{AdminApi, Ctx, Result};
use shared::dto::stats::{DashboardStats, FundingStats};
use std::sync::Arc;

/// Headline dashboard figures.
pub async fn dashboard(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
) -> Result<Json<DashboardStats>> {
    Ok(Json(api.dashboard_stats(&ctx).await?))
}

/// Funding overview figures.
pub async fn funding(
    State(api): State<Arc<dyn AdminApi>>,
    Extension(ctx): Extension<Ctx>,
) -> Result<Json<FundingStats>> {
    Ok(Json(api.funding_stats(&ctx).await?))
}
