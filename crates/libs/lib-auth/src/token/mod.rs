//! # Session Tokens
//!
//! Signed session tokens (HS256 JWT) carried in the session cookie.
//!
//! The claims hold the admin's identity and the upstream API bearer token,
//! so the cookie is the single source of truth for session state: there is
//! no separate user-data cookie to drift out of sync.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Session claims for an authenticated admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (admin ID)
    pub sub: String,
    /// Login name
    pub login: String,
    /// Display name
    pub name: String,
    /// Role reported by the upstream API
    pub role: String,
    /// Upstream API bearer token, if the session was opened against the
    /// real backend (mock sessions have none).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Encode a session token for an authenticated admin.
pub fn encode_session(
    admin_id: &str,
    login: &str,
    name: &str,
    role: &str,
    upstream: Option<String>,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, String> {
    let now = Utc::now();
    let exp = now + Duration::hours(ttl_hours);

    let claims = SessionClaims {
        sub: admin_id.to_string(),
        login: login.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        upstream,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to encode session token: {}", e))
}

/// Decode and validate a session token.
pub fn decode_session(token: &str, secret: &str) -> Result<SessionClaims, String> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| format!("Failed to decode session token: {}", e))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";

    #[test]
    fn test_session_roundtrip() {
        let token = encode_session(
            "admin-1",
            "admin",
            "Admin User",
            "admin",
            Some("upstream-bearer".to_string()),
            SECRET,
            24,
        )
        .expect("Session encoding should succeed");

        let claims = decode_session(&token, SECRET).expect("Session decoding should succeed");

        assert_eq!(claims.sub, "admin-1");
        assert_eq!(claims.login, "admin");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.upstream.as_deref(), Some("upstream-bearer"));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = encode_session("admin-1", "admin", "Admin User", "admin", None, SECRET, 24)
            .expect("Session encoding should succeed");

        assert!(decode_session(&token, "another-secret-also-32-characters!!").is_err());
    }

    #[test]
    fn test_expired_session_rejected() {
        let token = encode_session("admin-1", "admin", "Admin User", "admin", None, SECRET, -1)
            .expect("Session encoding should succeed");

        assert!(decode_session(&token, SECRET).is_err());
    }
}
