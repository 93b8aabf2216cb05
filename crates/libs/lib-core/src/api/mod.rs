//! # Admin API Service Layer
//!
//! [`AdminApi`] is the dependency-injection seam between the web layer and
//! the data source. Handlers only ever see `Arc<dyn AdminApi>`; at startup
//! [`select_api`] picks the network-backed client, the in-memory mock, or
//! the remote-with-fallback wrapper based on explicit configuration.

// region: --- Modules
pub mod fallback;
pub mod mock;
pub mod remote;
// endregion: --- Modules

// region: --- Re-exports
pub use fallback::FallbackApi;
pub use mock::MockApi;
pub use remote::RemoteApi;
// endregion: --- Re-exports

use crate::config::{ApiMode, Config};
use crate::ctx::Ctx;
use crate::error::Result;
use async_trait::async_trait;
use shared::dto::auth::{AuthUser, LoginRequest};
use shared::dto::category::{
    Category, CategoryForCreate, CategoryForUpdate, Subcategory, SubcategoryForCreate,
};
use shared::dto::project::{ModerationAction, Project, ProjectForCreate, ProjectForUpdate};
use shared::dto::settings::{
    ApiKey, ApiSettings, EmailSettings, GeneralSettings, SecuritySettings, Settings,
};
use shared::dto::stats::{DashboardStats, FundingStats};
use shared::dto::transaction::Transaction;
use shared::dto::user::{User, UserForCreate, UserForUpdate};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// The full admin operation surface, implemented by [`RemoteApi`],
/// [`MockApi`], and [`FallbackApi`].
///
/// List operations return complete collections; search, filtering, and
/// pagination are applied server-side by the web layer.
#[async_trait]
pub trait AdminApi: Send + Sync {
    // -- Auth
    async fn login(&self, req: &LoginRequest) -> Result<AuthUser>;

    // -- Projects
    async fn list_projects(&self, ctx: &Ctx) -> Result<Vec<Project>>;
    async fn get_project(&self, ctx: &Ctx, id: &str) -> Result<Project>;
    async fn create_project(&self, ctx: &Ctx, project: &ProjectForCreate) -> Result<Project>;
    async fn update_project(
        &self,
        ctx: &Ctx,
        id: &str,
        project: &ProjectForUpdate,
    ) -> Result<Project>;
    async fn delete_project(&self, ctx: &Ctx, id: &str) -> Result<()>;
    async fn moderate_project(
        &self,
        ctx: &Ctx,
        id: &str,
        action: ModerationAction,
    ) -> Result<Project>;

    // -- Users
    async fn list_users(&self, ctx: &Ctx) -> Result<Vec<User>>;
    async fn get_user(&self, ctx: &Ctx, id: &str) -> Result<User>;
    async fn create_user(&self, ctx: &Ctx, user: &UserForCreate) -> Result<User>;
    async fn update_user(&self, ctx: &Ctx, id: &str, user: &UserForUpdate) -> Result<User>;
    async fn delete_user(&self, ctx: &Ctx, id: &str) -> Result<()>;

    // -- Categories
    async fn list_categories(&self, ctx: &Ctx) -> Result<Vec<Category>>;
    async fn get_category(&self, ctx: &Ctx, id: &str) -> Result<Category>;
    async fn create_category(&self, ctx: &Ctx, category: &CategoryForCreate) -> Result<Category>;
    async fn update_category(
        &self,
        ctx: &Ctx,
        id: &str,
        category: &CategoryForUpdate,
    ) -> Result<Category>;
    async fn delete_category(&self, ctx: &Ctx, id: &str) -> Result<()>;
    async fn create_subcategory(
        &self,
        ctx: &Ctx,
        subcategory: &SubcategoryForCreate,
    ) -> Result<Subcategory>;

    // -- Transactions
    async fn list_transactions(&self, ctx: &Ctx) -> Result<Vec<Transaction>>;

    // -- Stats
    async fn dashboard_stats(&self, ctx: &Ctx) -> Result<DashboardStats>;
    async fn funding_stats(&self, ctx: &Ctx) -> Result<FundingStats>;

    // -- Settings
    async fn get_settings(&self, ctx: &Ctx) -> Result<Settings>;
    async fn update_general_settings(
        &self,
        ctx: &Ctx,
        settings: &GeneralSettings,
    ) -> Result<GeneralSettings>;
    async fn update_email_settings(
        &self,
        ctx: &Ctx,
        settings: &EmailSettings,
    ) -> Result<EmailSettings>;
    async fn update_security_settings(
        &self,
        ctx: &Ctx,
        settings: &SecuritySettings,
    ) -> Result<SecuritySettings>;
    async fn update_api_settings(&self, ctx: &Ctx, settings: &ApiSettings) -> Result<ApiSettings>;
    async fn generate_api_key(&self, ctx: &Ctx, name: &str) -> Result<ApiKey>;
    async fn revoke_api_key(&self, ctx: &Ctx, id: &str) -> Result<()>;
}

/// Build the [`AdminApi`] implementation selected by configuration.
pub fn select_api(config: &Config) -> Arc<dyn AdminApi> {
    let latency = Duration::from_millis(config.mock_latency_ms);

    match config.api_mode {
        ApiMode::Mock => {
            info!("[API] Serving from in-memory mock service");
            Arc::new(MockApi::new(latency))
        }
        ApiMode::Remote => {
            info!("[API] Serving from upstream at {}", config.upstream_url);
            Arc::new(RemoteApi::new(config.upstream_url.clone()))
        }
        ApiMode::RemoteWithFallback => {
            info!(
                "[API] Serving from upstream at {} with mock fallback",
                config.upstream_url
            );
            Arc::new(FallbackApi::new(
                RemoteApi::new(config.upstream_url.clone()),
                MockApi::new(latency),
            ))
        }
    }
}
