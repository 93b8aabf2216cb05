//! Data Transfer Objects for the admin API.

// region: --- Modules
pub mod auth;
pub mod category;
pub mod page;
pub mod project;
pub mod settings;
pub mod stats;
pub mod transaction;
pub mod user;
// endregion: --- Modules

// region: --- Re-exports
pub use auth::{AuthUser, ErrorResponse, LoginRequest, MessageResponse, SessionInfo};
pub use category::{Category, CategoryForCreate, CategoryForUpdate, Subcategory, SubcategoryForCreate};
pub use page::{ListQuery, Page, PageMark};
pub use project::{ModerationAction, ModerationRequest, Project, ProjectForCreate, ProjectForUpdate, ProjectStatus};
pub use settings::{
    ApiKey, ApiKeyForCreate, ApiSettings, EmailSettings, GeneralSettings, SecuritySettings, Settings,
};
pub use stats::{DashboardStats, FundingStats};
pub use transaction::{Transaction, TransactionStatus};
pub use user::{AccountStatus, User, UserForCreate, UserForUpdate, UserRole};
// endregion: --- Re-exports
