use serde::{Deserialize, Serialize};

/// Headline figures for the dashboard overview cards.
///
/// Values are pre-formatted strings as the upstream API reports them
/// (`"$8,668,904,981"`, `"+2.5%"`); the dashboard renders them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: String,
    pub total_funding: String,
    pub total_pledges: String,
    pub active_projects: String,
    pub projects_growth: String,
    pub funding_growth: String,
    pub pledges_growth: String,
    pub active_projects_growth: String,
}

/// Figures for the funding screen stat cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FundingStats {
    pub monthly_funding: String,
    pub average_pledge: String,
    pub successful_projects: String,
    pub failed_projects: String,
    pub monthly_funding_growth: String,
    pub average_pledge_growth: String,
    pub successful_projects_growth: String,
    pub failed_projects_growth: String,
}
