//! # Remote API Client
//!
//! Network-backed [`AdminApi`] implementation over the upstream SmartStar
//! REST API.
//!
//! Every request carries the session's upstream bearer token. An upstream
//! 401 surfaces as [`AppError::Unauthorized`], which the web layer turns
//! into a session-clearing response. Transport failures surface as
//! [`AppError::Upstream`] so the fallback wrapper can catch them.

use crate::api::AdminApi;
use crate::ctx::Ctx;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use lib_utils::debounce::Debounce;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::dto::auth::{AuthUser, LoginRequest};
use shared::dto::category::{
    Category, CategoryForCreate, CategoryForUpdate, Subcategory, SubcategoryForCreate,
};
use shared::dto::project::{
    ModerationAction, ModerationRequest, Project, ProjectForCreate, ProjectForUpdate,
};
use shared::dto::settings::{
    ApiKey, ApiKeyForCreate, ApiSettings, EmailSettings, GeneralSettings, SecuritySettings,
    Settings,
};
use shared::dto::stats::{DashboardStats, FundingStats};
use shared::dto::transaction::Transaction;
use shared::dto::user::{User, UserForCreate, UserForUpdate};
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// How long a fetched stats document is served before refetching.
const STATS_QUIET_PERIOD: Duration = Duration::from_secs(5);

/// Error body shape the upstream returns on failures.
#[derive(Debug, Deserialize)]
struct UpstreamError {
    #[serde(alias = "message")]
    error: Option<String>,
}

/// Login response envelope from `POST /users/login`.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: AuthUser,
}

/// Debounced single-value cache for the stats endpoints, which the
/// dashboard polls far more often than they change.
struct Cached<T> {
    debounce: Debounce,
    value: Option<T>,
}

impl<T> Cached<T> {
    fn new() -> Self {
        Self {
            debounce: Debounce::new(STATS_QUIET_PERIOD),
            value: None,
        }
    }
}

/// Network-backed admin API client.
pub struct RemoteApi {
    http: reqwest::Client,
    base_url: String,
    dashboard_cache: Mutex<Cached<DashboardStats>>,
    funding_cache: Mutex<Cached<FundingStats>>,
}

impl RemoteApi {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            dashboard_cache: Mutex::new(Cached::new()),
            funding_cache: Mutex::new(Cached::new()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with the session's bearer token attached.
    fn request(&self, ctx: &Ctx, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match ctx.upstream_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.check(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid upstream response: {}", e)))
    }

    /// Run a request whose success body is empty or irrelevant.
    async fn execute_empty(&self, builder: RequestBuilder) -> Result<()> {
        self.check(builder).await?;
        Ok(())
    }

    async fn check(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Upstream unreachable: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthorized(
                "Upstream session expired or invalid".to_string(),
            ));
        }

        let message = response
            .json::<UpstreamError>()
            .await
            .ok()
            .and_then(|e| e.error)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        match status {
            StatusCode::NOT_FOUND => Err(AppError::NotFound(message)),
            s if s.is_client_error() => Err(AppError::InvalidInput(message)),
            _ => Err(AppError::Upstream(message)),
        }
    }

    async fn get<T: DeserializeOwned>(&self, ctx: &Ctx, path: &str) -> Result<T> {
        self.execute(self.request(ctx, Method::GET, path)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        ctx: &Ctx,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.request(ctx, Method::POST, path).json(body))
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        ctx: &Ctx,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.request(ctx, Method::PUT, path).json(body))
            .await
    }
}

#[async_trait]
impl AdminApi for RemoteApi {
    async fn login(&self, req: &LoginRequest) -> Result<AuthUser> {
        debug!("[REMOTE] Login attempt for {}", req.login);
        let response: LoginResponse = self
            .execute(self.http.post(self.url("/users/login")).json(req))
            .await?;
        Ok(response.user)
    }

    async fn list_projects(&self, ctx: &Ctx) -> Result<Vec<Project>> {
        self.get(ctx, "/projects/admin/all").await
    }

    async fn get_project(&self, ctx: &Ctx, id: &str) -> Result<Project> {
        self.get(ctx, &format!("/projects/{}", id)).await
    }

    async fn create_project(&self, ctx: &Ctx, project: &ProjectForCreate) -> Result<Project> {
        self.post(ctx, "/projects/create", project).await
    }

    async fn update_project(
        &self,
        ctx: &Ctx,
        id: &str,
        project: &ProjectForUpdate,
    ) -> Result<Project> {
        self.put(ctx, &format!("/projects/{}", id), project).await
    }

    async fn delete_project(&self, ctx: &Ctx, id: &str) -> Result<()> {
        self.execute_empty(self.request(ctx, Method::DELETE, &format!("/projects/{}", id)))
            .await
    }

    async fn moderate_project(
        &self,
        ctx: &Ctx,
        id: &str,
        action: ModerationAction,
    ) -> Result<Project> {
        self.post(
            ctx,
            &format!("/projects/{}/moderate", id),
            &ModerationRequest { action },
        )
        .await
    }

    async fn list_users(&self, ctx: &Ctx) -> Result<Vec<User>> {
        self.get(ctx, "/users").await
    }

    async fn get_user(&self, ctx: &Ctx, id: &str) -> Result<User> {
        self.get(ctx, &format!("/users/{}", id)).await
    }

    async fn create_user(&self, ctx: &Ctx, user: &UserForCreate) -> Result<User> {
        self.post(ctx, "/users", user).await
    }

    async fn update_user(&self, ctx: &Ctx, id: &str, user: &UserForUpdate) -> Result<User> {
        self.put(ctx, &format!("/users/{}", id), user).await
    }

    async fn delete_user(&self, ctx: &Ctx, id: &str) -> Result<()> {
        self.execute_empty(self.request(ctx, Method::DELETE, &format!("/users/{}", id)))
            .await
    }

    async fn list_categories(&self, ctx: &Ctx) -> Result<Vec<Category>> {
        self.get(ctx, "/category/all").await
    }

    async fn get_category(&self, ctx: &Ctx, id: &str) -> Result<Category> {
        self.get(ctx, &format!("/categories/{}", id)).await
    }

    async fn create_category(&self, ctx: &Ctx, category: &CategoryForCreate) -> Result<Category> {
        self.post(ctx, "/category/create", category).await
    }

    async fn update_category(
        &self,
        ctx: &Ctx,
        id: &str,
        category: &CategoryForUpdate,
    ) -> Result<Category> {
        self.put(ctx, &format!("/categories/{}", id), category).await
    }

    async fn delete_category(&self, ctx: &Ctx, id: &str) -> Result<()> {
        self.execute_empty(self.request(ctx, Method::DELETE, &format!("/categories/{}", id)))
            .await
    }

    async fn create_subcategory(
        &self,
        ctx: &Ctx,
        subcategory: &SubcategoryForCreate,
    ) -> Result<Subcategory> {
        self.post(ctx, "/category/sub/create", subcategory).await
    }

    async fn list_transactions(&self, ctx: &Ctx) -> Result<Vec<Transaction>> {
        self.get(ctx, "/transactions").await
    }

    async fn dashboard_stats(&self, ctx: &Ctx) -> Result<DashboardStats> {
        {
            let mut cache = self
                .dashboard_cache
                .lock()
                .map_err(|_| AppError::Internal("Stats cache poisoned".to_string()))?;
            if !cache.debounce.ready() {
                if let Some(stats) = &cache.value {
                    debug!("[REMOTE] Serving debounced dashboard stats");
                    return Ok(stats.clone());
                }
            }
        }

        match self.get::<DashboardStats>(ctx, "/stats/dashboard").await {
            Ok(stats) => {
                if let Ok(mut cache) = self.dashboard_cache.lock() {
                    cache.value = Some(stats.clone());
                }
                Ok(stats)
            }
            Err(e) => {
                // Re-arm so the next caller retries immediately.
                if let Ok(mut cache) = self.dashboard_cache.lock() {
                    cache.debounce.reset();
                }
                Err(e)
            }
        }
    }

    async fn funding_stats(&self, ctx: &Ctx) -> Result<FundingStats> {
        {
            let mut cache = self
                .funding_cache
                .lock()
                .map_err(|_| AppError::Internal("Stats cache poisoned".to_string()))?;
            if !cache.debounce.ready() {
                if let Some(stats) = &cache.value {
                    debug!("[REMOTE] Serving debounced funding stats");
                    return Ok(stats.clone());
                }
            }
        }

        match self.get::<FundingStats>(ctx, "/stats/funding").await {
            Ok(stats) => {
                if let Ok(mut cache) = self.funding_cache.lock() {
                    cache.value = Some(stats.clone());
                }
                Ok(stats)
            }
            Err(e) => {
                if let Ok(mut cache) = self.funding_cache.lock() {
                    cache.debounce.reset();
                }
                Err(e)
            }
        }
    }

    async fn get_settings(&self, ctx: &Ctx) -> Result<Settings> {
        self.get(ctx, "/settings").await
    }

    async fn update_general_settings(
        &self,
        ctx: &Ctx,
        settings: &GeneralSettings,
    ) -> Result<GeneralSettings> {
        self.put(ctx, "/settings/general", settings).await
    }

    async fn update_email_settings(
        &self,
        ctx: &Ctx,
        settings: &EmailSettings,
    ) -> Result<EmailSettings> {
        self.put(ctx, "/settings/email", settings).await
    }

    async fn update_security_settings(
        &self,
        ctx: &Ctx,
        settings: &SecuritySettings,
    ) -> Result<SecuritySettings> {
        self.put(ctx, "/settings/security", settings).await
    }

    async fn update_api_settings(&self, ctx: &Ctx, settings: &ApiSettings) -> Result<ApiSettings> {
        self.put(ctx, "/settings/api", settings).await
    }

    async fn generate_api_key(&self, ctx: &Ctx, name: &str) -> Result<ApiKey> {
        self.post(
            ctx,
            "/settings/api/keys",
            &ApiKeyForCreate {
                name: name.to_string(),
            },
        )
        .await
    }

    async fn revoke_api_key(&self, ctx: &Ctx, id: &str) -> Result<()> {
        self.execute_empty(self.request(ctx, Method::DELETE, &format!("/settings/api/keys/{}", id)))
            .await
    }
}

impl std::fmt::Debug for RemoteApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_upstream_maps_to_upstream_error() {
        // Port 9 (discard) refuses connections on any sane test host.
        let api = RemoteApi::new("http://127.0.0.1:9/api".to_string());
        let ctx = Ctx::new("1", "admin", "Admin", "admin", Some("tok".to_string()));

        let err = api
            .list_projects(&ctx)
            .await
            .expect_err("Connection to a closed port should fail");
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = RemoteApi::new("http://localhost:4000/api/".to_string());
        assert_eq!(api.url("/users"), "http://localhost:4000/api/users");
    }
}
