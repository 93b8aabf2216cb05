use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Site-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub site_name: String,
    pub site_url: String,
    pub site_description: String,
    pub timezone: String,
    pub date_format: String,
    pub featured_projects: u32,
    pub projects_per_page: u32,
    pub maintenance_mode: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            site_name: "SmartStar".to_string(),
            site_url: String::new(),
            site_description: "Admin panel for managing crowdfunding projects and users".to_string(),
            timezone: "UTC".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            featured_projects: 5,
            projects_per_page: 10,
            maintenance_mode: false,
        }
    }
}

/// Outbound email configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailSettings {
    pub provider: String,
    pub from_name: String,
    pub from_email: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub encryption: String,
    pub welcome_template: String,
    pub approval_template: String,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            provider: "smtp".to_string(),
            from_name: "SmartStar Admin".to_string(),
            from_email: "admin@example.com".to_string(),
            smtp_host: String::new(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            encryption: "tls".to_string(),
            welcome_template: "Welcome to our platform! Your account has been created.".to_string(),
            approval_template: "Your project has been approved and is now live.".to_string(),
        }
    }
}

/// Security and password policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SecuritySettings {
    pub two_factor_auth: bool,
    pub password_expiry_days: u32,
    pub max_login_attempts: u32,
    pub session_timeout_minutes: u32,
    pub allowed_ips: String,
    pub min_password_length: u32,
    pub require_uppercase: bool,
    pub require_numbers: bool,
    pub require_special_chars: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor_auth: false,
            password_expiry_days: 90,
            max_login_attempts: 5,
            session_timeout_minutes: 30,
            allowed_ips: String::new(),
            min_password_length: 8,
            require_uppercase: true,
            require_numbers: true,
            require_special_chars: false,
        }
    }
}

/// Public API exposure settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    pub enable_api: bool,
    pub rate_limit: u32,
    pub webhook_url: String,
    pub webhook_events: Vec<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            enable_api: true,
            rate_limit: 100,
            webhook_url: String::new(),
            webhook_events: Vec::new(),
        }
    }
}

/// Issued API key. The secret is only present in the generation response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    pub created: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Request body for generating a new API key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiKeyForCreate {
    pub name: String,
}

/// Full settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub general: GeneralSettings,
    pub email: EmailSettings,
    pub security: SecuritySettings,
    pub api: ApiSettings,
    pub api_keys: Vec<ApiKey>,
}
