use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a crowdfunding project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Pending,
    Active,
    Rejected,
    Suspended,
    Funded,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Pending => write!(f, "pending"),
            ProjectStatus::Active => write!(f, "active"),
            ProjectStatus::Rejected => write!(f, "rejected"),
            ProjectStatus::Suspended => write!(f, "suspended"),
            ProjectStatus::Funded => write!(f, "funded"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ProjectStatus::Pending),
            "active" => Ok(ProjectStatus::Active),
            "rejected" => Ok(ProjectStatus::Rejected),
            "suspended" => Ok(ProjectStatus::Suspended),
            "funded" => Ok(ProjectStatus::Funded),
            _ => Err(format!("Invalid project status: {}", s)),
        }
    }
}

/// Admin moderation action on a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    Approve,
    Reject,
    Suspend,
}

impl std::fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModerationAction::Approve => write!(f, "approve"),
            ModerationAction::Reject => write!(f, "reject"),
            ModerationAction::Suspend => write!(f, "suspend"),
        }
    }
}

impl std::str::FromStr for ModerationAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approve" => Ok(ModerationAction::Approve),
            "reject" => Ok(ModerationAction::Reject),
            "suspend" => Ok(ModerationAction::Suspend),
            _ => Err(format!("Invalid moderation action: {}", s)),
        }
    }
}

/// Moderation request body for `POST /api/projects/{id}/moderate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModerationRequest {
    pub action: ModerationAction,
}

/// Crowdfunding project as shown in the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub user_id: String,
    pub category: String,
    pub subcategory_id: String,
    pub description: String,
    pub funding_goal: f64,
    pub current_amount: f64,
    /// Percent of goal raised; can exceed 100 for overfunded projects.
    pub progress: u32,
    pub backers: u32,
    pub status: ProjectStatus,
    pub moderated: bool,
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
}

impl Project {
    /// Percent of the funding goal covered by `current_amount`.
    pub fn progress_of(funding_goal: f64, current_amount: f64) -> u32 {
        if funding_goal <= 0.0 {
            return 0;
        }
        (current_amount / funding_goal * 100.0).round() as u32
    }
}

/// Fields required to create a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectForCreate {
    pub title: String,
    pub user_id: String,
    pub subcategory_id: String,
    pub description: String,
    pub funding_goal: f64,
    pub deadline: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

/// Partial project update; only provided fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectForUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_goal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

impl ProjectForUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn funding_goal(mut self, funding_goal: f64) -> Self {
        self.funding_goal = Some(funding_goal);
        self
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }
}
