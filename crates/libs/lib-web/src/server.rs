//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! [`start_server`] wires up logging, configuration, the service layer
//! selected by `SMARTSTAR_API_MODE`, the router, and the middleware stack.

// region: --- Imports
use crate::handlers;
use crate::middleware::{log_requests, map_res, require_session, stamp_req};
use axum::{
    routing::{get, post, put},
    Router,
};
use lib_core::{select_api, AdminApi, Config};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn AdminApi>,
    pub config: Config,
}

impl axum::extract::FromRef<AppState> for Arc<dyn AdminApi> {
    fn from_ref(state: &AppState) -> Self {
        state.api.clone()
    }
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3001")
    pub bind_address: String,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3001".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server.
///
/// # Errors
///
/// Returns an error if configuration loading or validation fails, or if
/// the listener cannot bind.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" => tracing_subscriber::EnvFilter::new("trace"),
        "debug" => tracing_subscriber::EnvFilter::new("debug"),
        "warn" => tracing_subscriber::EnvFilter::new("warn"),
        "error" => tracing_subscriber::EnvFilter::new("error"),
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");

    info!("SMARTSTAR ADMIN SERVICE STARTING");
    info!("Log level: {}", log_level);

    dotenvy::dotenv().ok();

    info!("Loading configuration...");
    let app_config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    app_config.validate().map_err(|e| anyhow::anyhow!(e))?;
    info!("API mode: {}", app_config.api_mode);

    let api = select_api(&app_config);

    let state = AppState {
        api,
        config: app_config,
    };

    let app = router(state, config.allowed_origins.clone());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    info!("SERVER READY: http://{}", config.bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the application router with all routes and middleware.
pub fn router(state: AppState, allowed_origins: Vec<String>) -> Router {
    use axum::http::{HeaderValue, Method};

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_credentials(true);

    info!("[ROUTE SETUP] Registering HTTP routes...");

    // Everything except login/logout/health sits behind the session check.
    let protected = Router::new()
        .route("/api/auth/me", get(handlers::auth::me))
        .route(
            "/api/projects",
            get(handlers::projects::list).post(handlers::projects::create),
        )
        .route(
            "/api/projects/{id}",
            get(handlers::projects::get)
                .put(handlers::projects::update)
                .delete(handlers::projects::delete),
        )
        .route(
            "/api/projects/{id}/moderate",
            post(handlers::projects::moderate),
        )
        .route(
            "/api/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route(
            "/api/users/{id}",
            get(handlers::users::get)
                .put(handlers::users::update)
                .delete(handlers::users::delete),
        )
        .route(
            "/api/categories",
            get(handlers::categories::list).post(handlers::categories::create),
        )
        .route(
            "/api/categories/subcategories",
            post(handlers::categories::create_subcategory),
        )
        .route(
            "/api/categories/{id}",
            get(handlers::categories::get)
                .put(handlers::categories::update)
                .delete(handlers::categories::delete),
        )
        .route("/api/transactions", get(handlers::transactions::list))
        .route("/api/stats/dashboard", get(handlers::stats::dashboard))
        .route("/api/stats/funding", get(handlers::stats::funding))
        .route("/api/settings", get(handlers::settings::get))
        .route(
            "/api/settings/general",
            put(handlers::settings::update_general),
        )
        .route("/api/settings/email", put(handlers::settings::update_email))
        .route(
            "/api/settings/security",
            put(handlers::settings::update_security),
        )
        .route("/api/settings/api", put(handlers::settings::update_api))
        .route(
            "/api/settings/api-keys",
            post(handlers::settings::generate_key),
        )
        .route(
            "/api/settings/api-keys/{id}",
            axum::routing::delete(handlers::settings::revoke_key),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/health", get(|| async { "OK" }))
        .merge(protected)
        .fallback(|| async {
            info!("[404 HANDLER] Unmatched route - returning 404");
            (axum::http::StatusCode::NOT_FOUND, "Route not found")
        })
        .with_state(state)
        // Response mapping (session clearing on 401) - innermost
        .layer(axum::middleware::from_fn(map_res))
        // Request/response logging
        .layer(axum::middleware::from_fn(log_requests))
        // Tower HTTP trace layer for spans
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<crate::middleware::mw_req_stamp::RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                },
            ),
        )
        // Request stamping (adds request ID) - outermost app middleware so
        // every layer below sees the ID
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

/// Log server information
fn log_server_info() {
    info!("AUTH:");
    info!("   • POST   /api/auth/login");
    info!("   • POST   /api/auth/logout");
    info!("   • GET    /api/auth/me");
    info!("PROJECTS:");
    info!("   • GET    /api/projects?q=&status=&category=&page=&per_page=");
    info!("   • POST   /api/projects");
    info!("   • GET    /api/projects/{{id}}");
    info!("   • PUT    /api/projects/{{id}}");
    info!("   • DELETE /api/projects/{{id}}");
    info!("   • POST   /api/projects/{{id}}/moderate");
    info!("USERS:");
    info!("   • GET    /api/users | POST /api/users | GET/PUT/DELETE /api/users/{{id}}");
    info!("CATEGORIES:");
    info!("   • GET    /api/categories | POST /api/categories | GET/PUT/DELETE /api/categories/{{id}}");
    info!("   • POST   /api/categories/subcategories");
    info!("TRANSACTIONS:");
    info!("   • GET    /api/transactions");
    info!("STATS:");
    info!("   • GET    /api/stats/dashboard | GET /api/stats/funding");
    info!("SETTINGS:");
    info!("   • GET    /api/settings | PUT /api/settings/{{general|email|security|api}}");
    info!("   • POST   /api/settings/api-keys | DELETE /api/settings/api-keys/{{id}}");
    info!("HEALTH:");
    info!("   • GET    /health");
}
// endregion: --- Server Setup
