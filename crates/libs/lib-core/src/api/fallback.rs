//! # Remote-with-Fallback Admin API
//!
//! Wraps [`RemoteApi`] and retries against [`MockApi`] whenever the remote
//! call fails with an upstream transport error. Application-level errors
//! (bad input, missing resources, rejected credentials) pass through
//! untouched; only connectivity failures trigger the fallback.

use crate::api::{AdminApi, MockApi, RemoteApi};
use crate::ctx::Ctx;
use crate::error::{AppError, Result};
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
use tracing::warn;

/// Remote API with in-memory fallback for upstream outages.
pub struct FallbackApi {
    remote: RemoteApi,
    mock: MockApi,
}

impl FallbackApi {
    pub fn new(remote: RemoteApi, mock: MockApi) -> Self {
        Self { remote, mock }
    }
}

/// Try the remote call; on an upstream transport error, log and replay the
/// same call against the mock.
macro_rules! with_fallback {
    ($self:ident, $op:literal, $method:ident ( $($arg:expr),* )) => {
        match $self.remote.$method($($arg),*).await {
            Err(AppError::Upstream(reason)) => {
                warn!("[FALLBACK] {} failed upstream ({}), serving mock data", $op, reason);
                $self.mock.$method($($arg),*).await
            }
            other => other,
        }
    };
}

#[async_trait]
impl AdminApi for FallbackApi {
    async fn login(&self, req: &LoginRequest) -> Result<AuthUser> {
        with_fallback!(self, "login", login(req))
    }

    async fn list_projects(&self, ctx: &Ctx) -> Result<Vec<Project>> {
        with_fallback!(self, "list_projects", list_projects(ctx))
    }

    async fn get_project(&self, ctx: &Ctx, id: &str) -> Result<Project> {
        with_fallback!(self, "get_project", get_project(ctx, id))
    }

    async fn create_project(&self, ctx: &Ctx, project: &ProjectForCreate) -> Result<Project> {
        with_fallback!(self, "create_project", create_project(ctx, project))
    }

    async fn update_project(
        &self,
        ctx: &Ctx,
        id: &str,
        project: &ProjectForUpdate,
    ) -> Result<Project> {
        with_fallback!(self, "update_project", update_project(ctx, id, project))
    }

    async fn delete_project(&self, ctx: &Ctx, id: &str) -> Result<()> {
        with_fallback!(self, "delete_project", delete_project(ctx, id))
    }

    async fn moderate_project(
        &self,
        ctx: &Ctx,
        id: &str,
        action: ModerationAction,
    ) -> Result<Project> {
        with_fallback!(self, "moderate_project", moderate_project(ctx, id, action))
    }

    async fn list_users(&self, ctx: &Ctx) -> Result<Vec<User>> {
        with_fallback!(self, "list_users", list_users(ctx))
    }

    async fn get_user(&self, ctx: &Ctx, id: &str) -> Result<User> {
        with_fallback!(self, "get_user", get_user(ctx, id))
    }

    async fn create_user(&self, ctx: &Ctx, user: &UserForCreate) -> Result<User> {
        with_fallback!(self, "create_user", create_user(ctx, user))
    }

    async fn update_user(&self, ctx: &Ctx, id: &str, user: &UserForUpdate) -> Result<User> {
        with_fallback!(self, "update_user", update_user(ctx, id, user))
    }

    async fn delete_user(&self, ctx: &Ctx, id: &str) -> Result<()> {
        with_fallback!(self, "delete_user", delete_user(ctx, id))
    }

    async fn list_categories(&self, ctx: &Ctx) -> Result<Vec<Category>> {
        with_fallback!(self, "list_categories", list_categories(ctx))
    }

    async fn get_category(&self, ctx: &Ctx, id: &str) -> Result<Category> {
        with_fallback!(self, "get_category", get_category(ctx, id))
    }

    async fn create_category(&self, ctx: &Ctx, category: &CategoryForCreate) -> Result<Category> {
        with_fallback!(self, "create_category", create_category(ctx, category))
    }

    async fn update_category(
        &self,
        ctx: &Ctx,
        id: &str,
        category: &CategoryForUpdate,
    ) -> Result<Category> {
        with_fallback!(self, "update_category", update_category(ctx, id, category))
    }

    async fn delete_category(&self, ctx: &Ctx, id: &str) -> Result<()> {
        with_fallback!(self, "delete_category", delete_category(ctx, id))
    }

    async fn create_subcategory(
        &self,
        ctx: &Ctx,
        subcategory: &SubcategoryForCreate,
    ) -> Result<Subcategory> {
        with_fallback!(
            self,
            "create_subcategory",
            create_subcategory(ctx, subcategory)
        )
    }

    async fn list_transactions(&self, ctx: &Ctx) -> Result<Vec<Transaction>> {
        with_fallback!(self, "list_transactions", list_transactions(ctx))
    }

    async fn dashboard_stats(&self, ctx: &Ctx) -> Result<DashboardStats> {
        with_fallback!(self, "dashboard_stats", dashboard_stats(ctx))
    }

    async fn funding_stats(&self, ctx: &Ctx) -> Result<FundingStats> {
        with_fallback!(self, "funding_stats", funding_stats(ctx))
    }

    async fn get_settings(&self, ctx: &Ctx) -> Result<Settings> {
        with_fallback!(self, "get_settings", get_settings(ctx))
    }

    async fn update_general_settings(
        &self,
        ctx: &Ctx,
        settings: &GeneralSettings,
    ) -> Result<GeneralSettings> {
        with_fallback!(
            self,
            "update_general_settings",
            update_general_settings(ctx, settings)
        )
    }

    async fn update_email_settings(
        &self,
        ctx: &Ctx,
        settings: &EmailSettings,
    ) -> Result<EmailSettings> {
        with_fallback!(
            self,
            "update_email_settings",
            update_email_settings(ctx, settings)
        )
    }

    async fn update_security_settings(
        &self,
        ctx: &Ctx,
        settings: &SecuritySettings,
    ) -> Result<SecuritySettings> {
        with_fallback!(
            self,
            "update_security_settings",
            update_security_settings(ctx, settings)
        )
    }

    async fn update_api_settings(&self, ctx: &Ctx, settings: &ApiSettings) -> Result<ApiSettings> {
        with_fallback!(
            self,
            "update_api_settings",
            update_api_settings(ctx, settings)
        )
    }

    async fn generate_api_key(&self, ctx: &Ctx, name: &str) -> Result<ApiKey> {
        with_fallback!(self, "generate_api_key", generate_api_key(ctx, name))
    }

    async fn revoke_api_key(&self, ctx: &Ctx, id: &str) -> Result<()> {
        with_fallback!(self, "revoke_api_key", revoke_api_key(ctx, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_remote() -> RemoteApi {
        // Port 9 (discard) is never listening locally.
        RemoteApi::new("http://127.0.0.1:9/api".to_string())
    }

    #[tokio::test]
    async fn test_upstream_outage_serves_mock_data() {
        let api = FallbackApi::new(unreachable_remote(), MockApi::seeded());
        let ctx = Ctx::new("mock-1", "admin", "Admin User", "admin", None);

        let projects = api
            .list_projects(&ctx)
            .await
            .expect("Fallback should serve the mock listing");
        assert!(!projects.is_empty());
    }

    #[tokio::test]
    async fn test_application_errors_pass_through() {
        // The mock rejects these credentials, and so does a dead upstream
        // after fallback kicks in; the surfaced error must stay
        // Unauthorized, not Upstream.
        let api = FallbackApi::new(unreachable_remote(), MockApi::seeded());

        let err = api
            .login(&LoginRequest {
                login: "admin".to_string(),
                password: "not-the-password".to_string(),
            })
            .await
            .expect_err("Bad credentials should be rejected");
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
