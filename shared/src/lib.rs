//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the admin dashboard UI and the
//! SmartStar admin service. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto::auth`]**: Login, session, and error envelope DTOs
//! - **[`dto::project`]**: Crowdfunding projects and moderation actions
//! - **[`dto::user`]**: Platform users (creators and backers)
//! - **[`dto::category`]**: Categories and subcategories
//! - **[`dto::transaction`]**: Funding transactions
//! - **[`dto::stats`]**: Dashboard and funding statistics
//! - **[`dto::settings`]**: Platform settings and API keys
//! - **[`dto::page`]**: Paginated list envelope
//!
//! ## Wire Format
//!
//! Field names use **snake_case** in Rust, which maps to **snake_case** in
//! JSON by default. Status fields serialize as lowercase strings and also
//! implement `Display` + `FromStr` for query-string use.

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
