//! # HTTP Request Handlers
//!
//! Axum handlers for the admin dashboard API, organized by feature domain.
//! Handlers validate input, delegate to the [`lib_core::AdminApi`] service,
//! and shape list responses through [`crate::listing`].
//!
//! ## Handler Modules
//!
//! - **[`auth`]**: session endpoints
//!   - `POST /api/auth/login` - Open a session (sets the session cookie)
//!   - `POST /api/auth/logout` - Clear the session cookie
//!   - `GET  /api/auth/me` - Current session info
//!
//! - **[`projects`]**: project management
//!   - `GET/POST /api/projects`, `GET/PUT/DELETE /api/projects/{id}`
//!   - `POST /api/projects/{id}/moderate` - approve / reject / suspend
//!
//! - **[`users`]**: platform user management (CRUD)
//!
//! - **[`categories`]**: category management (CRUD) and
//!   `POST /api/categories/subcategories`
//!
//! - **[`transactions`]**: `GET /api/transactions` - pledge listing
//!
//! - **[`stats`]**: `GET /api/stats/dashboard`, `GET /api/stats/funding`
//!
//! - **[`settings`]**: `GET /api/settings`, per-section `PUT`s, and API key
//!   generation/revocation
//!
//! Protected endpoints receive the authenticated admin via `Extension<Ctx>`,
//! injected by the session middleware. Errors are `lib_core::AppError`,
//! rendered as `{"error", "code"}` JSON.

pub mod auth;
pub mod categories;
pub mod projects;
pub mod settings;
pub mod stats;
pub mod transactions;
pub mod users;
