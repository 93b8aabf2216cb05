//! # Core Library
//!
//! Configuration, error handling, request context, and the admin API
//! service layer (remote client, in-memory mock, and fallback selection).

pub mod api;
pub mod config;
pub mod ctx;
pub mod error;

// Re-export commonly used types
pub use api::{select_api, AdminApi, FallbackApi, MockApi, RemoteApi};
pub use config::{ApiMode, Config};
pub use ctx::Ctx;
pub use error::{AppError, Result};
