//! # Application Configuration
//!
//! Configuration loaded from environment variables and validated on
//! startup to fail fast if misconfigured.
//!
//! The service mode is explicit: `SMARTSTAR_API_MODE` selects the real
//! upstream client, the in-memory mock, or remote-with-mock-fallback.
//! There is no hostname sniffing.

use lib_utils::envs::{get_env, get_env_or};

/// Which [`crate::AdminApi`] implementation serves requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiMode {
    /// In-memory mock service only (offline/preview mode).
    Mock,
    /// Real upstream API only.
    Remote,
    /// Real upstream API, falling back to the mock when unreachable.
    RemoteWithFallback,
}

impl std::fmt::Display for ApiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiMode::Mock => write!(f, "mock"),
            ApiMode::Remote => write!(f, "remote"),
            ApiMode::RemoteWithFallback => write!(f, "remote-with-fallback"),
        }
    }
}

impl std::str::FromStr for ApiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(ApiMode::Mock),
            "remote" => Ok(ApiMode::Remote),
            "remote-with-fallback" => Ok(ApiMode::RemoteWithFallback),
            _ => Err(format!("Invalid API mode: {}", s)),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the upstream SmartStar REST API.
    pub upstream_url: String,

    /// Secret key for signing session tokens.
    ///
    /// **Must be at least 32 characters long.**
    pub session_secret: String,

    /// Session validity period in hours.
    ///
    /// Valid range: 1-720 hours (1 hour to 30 days).
    pub session_ttl_hours: i64,

    /// Which service implementation handles requests.
    pub api_mode: ApiMode,

    /// Simulated latency of the mock service, in milliseconds.
    pub mock_latency_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let upstream_url = get_env_or("SMARTSTAR_UPSTREAM_URL", "http://localhost:4000/api");

        let session_secret =
            get_env("SESSION_SECRET").map_err(|_| "SESSION_SECRET must be set in environment")?;

        let session_ttl_hours = get_env_or("SESSION_TTL_HOURS", "24")
            .parse()
            .map_err(|e| format!("SESSION_TTL_HOURS must be a valid number: {}", e))?;

        let api_mode = get_env_or("SMARTSTAR_API_MODE", "mock")
            .parse()
            .map_err(|e: String| e)?;

        let mock_latency_ms = get_env_or("SMARTSTAR_MOCK_LATENCY_MS", "300")
            .parse()
            .map_err(|e| format!("SMARTSTAR_MOCK_LATENCY_MS must be a valid number: {}", e))?;

        Ok(Self {
            upstream_url,
            session_secret,
            session_ttl_hours,
            api_mode,
            mock_latency_ms,
        })
    }

    /// Validate configuration values against security and sanity rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.session_secret.len() < 32 {
            return Err("SESSION_SECRET must be at least 32 characters long".to_string());
        }

        if self.session_ttl_hours < 1 || self.session_ttl_hours > 720 {
            return Err("SESSION_TTL_HOURS must be between 1 and 720 (30 days)".to_string());
        }

        if self.api_mode != ApiMode::Mock && self.upstream_url.trim().is_empty() {
            return Err("SMARTSTAR_UPSTREAM_URL must be set for remote modes".to_string());
        }

        if self.mock_latency_ms > 5_000 {
            return Err("SMARTSTAR_MOCK_LATENCY_MS must be at most 5000".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            upstream_url: "http://localhost:4000/api".to_string(),
            session_secret: "test-secret-key-must-be-at-least-32-chars!".to_string(),
            session_ttl_hours: 24,
            api_mode: ApiMode::Mock,
            mock_latency_ms: 0,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_short_secret_rejected() {
        let mut config = valid_config();
        config.session_secret = "short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ttl_bounds() {
        let mut config = valid_config();
        config.session_ttl_hours = 0;
        assert!(config.validate().is_err());
        config.session_ttl_hours = 721;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_mode_parsing() {
        assert_eq!("mock".parse::<ApiMode>(), Ok(ApiMode::Mock));
        assert_eq!("remote".parse::<ApiMode>(), Ok(ApiMode::Remote));
        assert_eq!(
            "Remote-With-Fallback".parse::<ApiMode>(),
            Ok(ApiMode::RemoteWithFallback)
        );
        assert!("preview".parse::<ApiMode>().is_err());
    }
}
