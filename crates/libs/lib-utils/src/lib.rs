//! # Utilities Library
//!
//! Shared utility functions for environment variables, time, input
//! validation, pagination, and debouncing.

pub mod debounce;
pub mod envs;
pub mod pagination;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use debounce::Debounce;
pub use envs::{get_env, get_env_or, get_env_parse};
pub use pagination::{page_window, slice_bounds};
pub use time::{format_time, now_utc, parse_utc};
pub use validation::{Rule, Schema, Value};
