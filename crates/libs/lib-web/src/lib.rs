//! # Web Library
//!
//! HTTP handlers, middleware, session cookies, and server setup for the
//! SmartStar admin dashboard service.

pub mod handlers;
pub mod listing;
pub mod middleware;
pub mod server;
pub mod session;

pub use server::{router, start_server, AppState, ServerConfig};
