//! # Authentication Library
//!
//! Password hashing and signed session tokens for the admin service.

pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use pwd::{hash_password, verify_password};
pub use token::{decode_session, encode_session, SessionClaims};
