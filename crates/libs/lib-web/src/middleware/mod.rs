//! # Middleware
//!
//! Axum middleware for session authentication, request stamping, logging,
//! and response mapping.
//!
//! ## Modules
//!
//! - **[`mw_session`]**: session cookie validation, `Ctx` injection
//! - **[`mw_req_stamp`]**: request ID and timestamp stamping
//! - **[`mw_logging`]**: request/response logging
//! - **[`mw_res_map`]**: response mapping (401 session clearing)

// region: --- Modules
pub mod mw_logging;
pub mod mw_req_stamp;
pub mod mw_res_map;
pub mod mw_session;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_logging::log_requests;
pub use mw_req_stamp::{stamp_req, RequestStamp};
pub use mw_res_map::map_res;
pub use mw_session::require_session;
// endregion: --- Re-exports
