//! # Mock Admin API
//!
//! In-memory [`AdminApi`] implementation used in offline/preview mode and
//! as the fallback when the upstream API is unreachable. Seeded with
//! representative platform data; mutations are visible to subsequent reads
//! for the lifetime of the process.
//!
//! Latency is simulated so the dashboard's loading states behave the same
//! as against the real backend. Tests use [`MockApi::seeded`] (zero
//! latency).

use crate::api::AdminApi;
use crate::ctx::Ctx;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use chrono::Duration as ChronoDuration;
use lib_auth::{hash_password, verify_password};
use lib_utils::time::now_utc;
use shared::dto::auth::{AuthUser, LoginRequest};
use shared::dto::category::{
    Category, CategoryForCreate, CategoryForUpdate, Subcategory, SubcategoryForCreate,
};
use shared::dto::project::{
    ModerationAction, Project, ProjectForCreate, ProjectForUpdate, ProjectStatus,
};
use shared::dto::settings::{
    ApiKey, ApiSettings, EmailSettings, GeneralSettings, SecuritySettings, Settings,
};
use shared::dto::stats::{DashboardStats, FundingStats};
use shared::dto::transaction::{Transaction, TransactionStatus};
use shared::dto::user::{AccountStatus, User, UserForCreate, UserForUpdate, UserRole};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::sleep;
use uuid::Uuid;

/// Credentials accepted by the mock login.
const MOCK_ADMIN_LOGIN: &str = "admin";
const MOCK_ADMIN_PASSWORD: &str = "admin123";

struct MockStore {
    projects: Vec<Project>,
    users: Vec<User>,
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
    settings: Settings,
}

/// In-memory admin API with simulated latency.
pub struct MockApi {
    latency: Duration,
    admin_hash: String,
    store: RwLock<MockStore>,
}

impl MockApi {
    pub fn new(latency: Duration) -> Self {
        // MOCK_ADMIN_PASSWORD satisfies the minimum length, so this cannot
        // fail at runtime.
        let admin_hash =
            hash_password(MOCK_ADMIN_PASSWORD).expect("seed admin password must be hashable");

        Self {
            latency,
            admin_hash,
            store: RwLock::new(seed_store()),
        }
    }

    /// Zero-latency instance for tests.
    pub fn seeded() -> Self {
        Self::new(Duration::ZERO)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn seed_store() -> MockStore {
    let now = now_utc();
    let days = ChronoDuration::days;

    let subcategory = |id: &str, parent: &str, name: &str, description: &str, projects: u32, order: u32| Subcategory {
        id: id.to_string(),
        parent_id: parent.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        projects,
        active: true,
        display_order: order,
    };

    let categories = vec![
        Category {
            id: "1".to_string(),
            name: "Art".to_string(),
            description: "Visual arts, including painting, sculpture, and photography".to_string(),
            projects: 32_450,
            funding: 245_780_450.0,
            success_rate: 58,
            featured: true,
            active: true,
            display_order: 1,
            subcategories: vec![
                subcategory("101", "1", "Painting", "Traditional and digital painting", 12_450, 1),
                subcategory("102", "1", "Sculpture", "3D art forms in various materials", 8_320, 2),
            ],
        },
        Category {
            id: "2".to_string(),
            name: "Comics".to_string(),
            description: "Comic books, graphic novels, and webcomics".to_string(),
            projects: 12_340,
            funding: 178_450_320.0,
            success_rate: 72,
            featured: true,
            active: true,
            display_order: 2,
            subcategories: vec![subcategory(
                "201", "2", "Graphic Novels", "Long-form comic storytelling", 5_640, 1,
            )],
        },
        Category {
            id: "3".to_string(),
            name: "Publishing".to_string(),
            description: "Fiction, non-fiction, and periodicals".to_string(),
            projects: 18_920,
            funding: 132_904_110.0,
            success_rate: 64,
            featured: false,
            active: true,
            display_order: 3,
            subcategories: vec![subcategory(
                "301", "3", "Fiction", "Novels and short story collections", 7_410, 1,
            )],
        },
        Category {
            id: "4".to_string(),
            name: "Games".to_string(),
            description: "Tabletop, card, and video games".to_string(),
            projects: 9_870,
            funding: 401_220_980.0,
            success_rate: 47,
            featured: false,
            active: true,
            display_order: 4,
            subcategories: vec![subcategory(
                "401", "4", "Tabletop", "Board games and miniatures", 4_130, 1,
            )],
        },
    ];

    let project = |id: &str,
                   title: &str,
                   creator: &str,
                   user_id: &str,
                   category: &str,
                   subcategory_id: &str,
                   description: &str,
                   goal: f64,
                   current: f64,
                   backers: u32,
                   status: ProjectStatus,
                   moderated: bool,
                   age_days: i64,
                   runway_days: i64| Project {
        id: id.to_string(),
        title: title.to_string(),
        creator: creator.to_string(),
        user_id: user_id.to_string(),
        category: category.to_string(),
        subcategory_id: subcategory_id.to_string(),
        description: description.to_string(),
        funding_goal: goal,
        current_amount: current,
        progress: Project::progress_of(goal, current),
        backers,
        status,
        moderated,
        created_at: now - days(age_days),
        deadline: now + days(runway_days),
    };

    let projects = vec![
        project(
            "1",
            "SPELL BOUND vintage witchcraft",
            "Thomas Noonan",
            "1",
            "Art",
            "101",
            "A collection of vintage witchcraft illustrations and spells from the 1800s.",
            10_000.0,
            12_450.0,
            245,
            ProjectStatus::Active,
            false,
            21,
            9,
        ),
        project(
            "2",
            "Tomb of the Sun King",
            "Jacquelyn Benson",
            "2",
            "Comics",
            "201",
            "An illustrated guide to the tombs of ancient Egyptian pharaohs.",
            25_000.0,
            34_890.0,
            612,
            ProjectStatus::Active,
            true,
            35,
            10,
        ),
        project(
            "3",
            "The Last Lighthouse",
            "Elena Petrova",
            "3",
            "Publishing",
            "301",
            "A maritime novel about the final keeper of the Kolyuchin lighthouse.",
            15_000.0,
            2_300.0,
            54,
            ProjectStatus::Pending,
            false,
            4,
            41,
        ),
        project(
            "4",
            "Clockwork Dungeon",
            "Thomas Noonan",
            "1",
            "Games",
            "401",
            "A cooperative dungeon crawler with wind-up miniatures.",
            40_000.0,
            18_750.0,
            301,
            ProjectStatus::Suspended,
            true,
            48,
            2,
        ),
        project(
            "5",
            "Sculpting the Sea",
            "Jacquelyn Benson",
            "2",
            "Art",
            "102",
            "Driftwood sculpture series documenting coastal erosion.",
            8_000.0,
            120.0,
            3,
            ProjectStatus::Rejected,
            true,
            11,
            34,
        ),
        project(
            "6",
            "Inkbound Anthology",
            "Elena Petrova",
            "3",
            "Comics",
            "201",
            "Twelve short comics from first-time authors, bound in one volume.",
            12_000.0,
            12_600.0,
            410,
            ProjectStatus::Funded,
            true,
            90,
            -5,
        ),
    ];

    let user = |id: &str, name: &str, email: &str, role: UserRole, projects: u32, backed: u32, pledged: f64, joined_days: i64, status: AccountStatus| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        projects,
        backed,
        pledged,
        joined: now - days(joined_days),
        status,
    };

    let users = vec![
        user("1", "Thomas Noonan", "thomas@example.com", UserRole::Creator, 3, 12, 1_240.0, 940, AccountStatus::Active),
        user("2", "Jacquelyn Benson", "jacquelyn@example.com", UserRole::Creator, 5, 8, 780.0, 1_250, AccountStatus::Active),
        user("3", "Elena Petrova", "elena@example.com", UserRole::Creator, 2, 1, 95.0, 310, AccountStatus::Active),
        user("4", "John Smith", "john@example.com", UserRole::Backer, 0, 24, 3_120.0, 620, AccountStatus::Active),
        user("5", "Sarah Johnson", "sarah@example.com", UserRole::Backer, 0, 17, 2_210.0, 415, AccountStatus::Active),
        user("6", "Viktor Hale", "viktor@example.com", UserRole::Backer, 0, 2, 40.0, 88, AccountStatus::Suspended),
    ];

    let transaction = |id: &str, project: &str, backer: &str, amount: f64, hours_ago: i64, status: TransactionStatus| Transaction {
        id: id.to_string(),
        project: project.to_string(),
        backer: backer.to_string(),
        amount,
        date: now - ChronoDuration::hours(hours_ago),
        status,
    };

    let transactions = vec![
        transaction("TRX-78945", "SPELL BOUND vintage witchcraft", "John Smith", 120.0, 2, TransactionStatus::Completed),
        transaction("TRX-78946", "Tomb of the Sun King", "Sarah Johnson", 85.0, 3, TransactionStatus::Completed),
        transaction("TRX-78947", "Inkbound Anthology", "John Smith", 250.0, 7, TransactionStatus::Completed),
        transaction("TRX-78948", "The Last Lighthouse", "Sarah Johnson", 45.0, 12, TransactionStatus::Pending),
        transaction("TRX-78949", "Clockwork Dungeon", "Viktor Hale", 999.0, 30, TransactionStatus::Refunded),
        transaction("TRX-78950", "SPELL BOUND vintage witchcraft", "Sarah Johnson", 60.0, 49, TransactionStatus::Failed),
    ];

    let settings = Settings {
        api_keys: vec![
            ApiKey {
                id: "1".to_string(),
                name: "Production API Key".to_string(),
                created: now - days(400),
                key: None,
            },
            ApiKey {
                id: "2".to_string(),
                name: "Development API Key".to_string(),
                created: now - days(360),
                key: None,
            },
        ],
        ..Settings::default()
    };

    MockStore {
        projects,
        users,
        categories,
        transactions,
        settings,
    }
}

fn dashboard_stats_snapshot() -> DashboardStats {
    DashboardStats {
        total_projects: "276,346".to_string(),
        total_funding: "$8,668,904,981".to_string(),
        total_pledges: "101,440,004".to_string(),
        active_projects: "4,328".to_string(),
        projects_growth: "+2.5%".to_string(),
        funding_growth: "+4.7%".to_string(),
        pledges_growth: "+1.3%".to_string(),
        active_projects_growth: "-0.8%".to_string(),
    }
}

fn funding_stats_snapshot() -> FundingStats {
    FundingStats {
        monthly_funding: "$1,256,890".to_string(),
        average_pledge: "$78.45".to_string(),
        successful_projects: "342".to_string(),
        failed_projects: "87".to_string(),
        monthly_funding_growth: "+12.5%".to_string(),
        average_pledge_growth: "+3.2%".to_string(),
        successful_projects_growth: "+8.7%".to_string(),
        failed_projects_growth: "-2.3%".to_string(),
    }
}

#[async_trait]
impl AdminApi for MockApi {
    async fn login(&self, req: &LoginRequest) -> Result<AuthUser> {
        self.simulate_latency().await;

        let password_ok = verify_password(&req.password, &self.admin_hash)
            .map_err(AppError::Internal)?;

        if req.login != MOCK_ADMIN_LOGIN || !password_ok {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        Ok(AuthUser {
            id: "mock-1".to_string(),
            login: MOCK_ADMIN_LOGIN.to_string(),
            name: "Admin User".to_string(),
            role: "admin".to_string(),
            token: None,
        })
    }

    async fn list_projects(&self, _ctx: &Ctx) -> Result<Vec<Project>> {
        self.simulate_latency().await;
        Ok(self.store.read().await.projects.clone())
    }

    async fn get_project(&self, _ctx: &Ctx, id: &str) -> Result<Project> {
        self.simulate_latency().await;
        self.store
            .read()
            .await
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
    }

    async fn create_project(&self, _ctx: &Ctx, req: &ProjectForCreate) -> Result<Project> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let creator = store
            .users
            .iter()
            .find(|u| u.id == req.user_id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Unknown Creator".to_string());

        let category = store
            .categories
            .iter()
            .find(|c| c.subcategories.iter().any(|s| s.id == req.subcategory_id))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Uncategorized".to_string());

        let project = Project {
            id: new_id(),
            title: req.title.clone(),
            creator,
            user_id: req.user_id.clone(),
            category,
            subcategory_id: req.subcategory_id.clone(),
            description: req.description.clone(),
            funding_goal: req.funding_goal,
            current_amount: 0.0,
            progress: 0,
            backers: 0,
            status: req.status.unwrap_or(ProjectStatus::Active),
            moderated: false,
            created_at: now_utc(),
            deadline: req.deadline,
        };

        store.projects.push(project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        _ctx: &Ctx,
        id: &str,
        req: &ProjectForUpdate,
    ) -> Result<Project> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let new_category = req.subcategory_id.as_ref().map(|sub_id| {
            store
                .categories
                .iter()
                .find(|c| c.subcategories.iter().any(|s| &s.id == sub_id))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Uncategorized".to_string())
        });

        let project = store
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))?;

        if let Some(title) = &req.title {
            project.title = title.clone();
        }
        if let Some(description) = &req.description {
            project.description = description.clone();
        }
        if let Some(subcategory_id) = &req.subcategory_id {
            project.subcategory_id = subcategory_id.clone();
        }
        if let Some(category) = new_category {
            project.category = category;
        }
        if let Some(funding_goal) = req.funding_goal {
            project.funding_goal = funding_goal;
            project.progress = Project::progress_of(funding_goal, project.current_amount);
        }
        if let Some(deadline) = req.deadline {
            project.deadline = deadline;
        }
        if let Some(status) = req.status {
            project.status = status;
        }

        Ok(project.clone())
    }

    async fn delete_project(&self, _ctx: &Ctx, id: &str) -> Result<()> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let before = store.projects.len();
        store.projects.retain(|p| p.id != id);
        if store.projects.len() == before {
            return Err(AppError::NotFound(format!("Project {} not found", id)));
        }
        Ok(())
    }

    async fn moderate_project(
        &self,
        _ctx: &Ctx,
        id: &str,
        action: ModerationAction,
    ) -> Result<Project> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let project = store
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))?;

        match action {
            ModerationAction::Approve => {
                project.moderated = true;
                project.status = ProjectStatus::Active;
            }
            ModerationAction::Reject => {
                project.moderated = true;
                project.status = ProjectStatus::Rejected;
            }
            // Suspension does not count as moderation review.
            ModerationAction::Suspend => {
                project.status = ProjectStatus::Suspended;
            }
        }

        Ok(project.clone())
    }

    async fn list_users(&self, _ctx: &Ctx) -> Result<Vec<User>> {
        self.simulate_latency().await;
        Ok(self.store.read().await.users.clone())
    }

    async fn get_user(&self, _ctx: &Ctx, id: &str) -> Result<User> {
        self.simulate_latency().await;
        self.store
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    async fn create_user(&self, _ctx: &Ctx, req: &UserForCreate) -> Result<User> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let user = User {
            id: new_id(),
            name: req.name.clone(),
            email: req.email.clone(),
            role: req.role,
            projects: 0,
            backed: 0,
            pledged: 0.0,
            joined: now_utc(),
            status: AccountStatus::Active,
        };

        store.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, _ctx: &Ctx, id: &str, req: &UserForUpdate) -> Result<User> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let user = store
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        if let Some(name) = &req.name {
            user.name = name.clone();
        }
        if let Some(email) = &req.email {
            user.email = email.clone();
        }
        if let Some(role) = req.role {
            user.role = role;
        }
        if let Some(status) = req.status {
            user.status = status;
        }

        Ok(user.clone())
    }

    async fn delete_user(&self, _ctx: &Ctx, id: &str) -> Result<()> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let before = store.users.len();
        store.users.retain(|u| u.id != id);
        if store.users.len() == before {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }

    async fn list_categories(&self, _ctx: &Ctx) -> Result<Vec<Category>> {
        self.simulate_latency().await;
        Ok(self.store.read().await.categories.clone())
    }

    async fn get_category(&self, _ctx: &Ctx, id: &str) -> Result<Category> {
        self.simulate_latency().await;
        self.store
            .read()
            .await
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    async fn create_category(&self, _ctx: &Ctx, req: &CategoryForCreate) -> Result<Category> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let category = Category {
            id: new_id(),
            name: req.name.clone(),
            description: req.description.clone(),
            projects: 0,
            funding: 0.0,
            success_rate: 0,
            featured: req.featured,
            active: true,
            display_order: req
                .display_order
                .unwrap_or(store.categories.len() as u32 + 1),
            subcategories: Vec::new(),
        };

        store.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        _ctx: &Ctx,
        id: &str,
        req: &CategoryForUpdate,
    ) -> Result<Category> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let category = store
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        if let Some(name) = &req.name {
            category.name = name.clone();
        }
        if let Some(description) = &req.description {
            category.description = description.clone();
        }
        if let Some(featured) = req.featured {
            category.featured = featured;
        }
        if let Some(active) = req.active {
            category.active = active;
        }
        if let Some(display_order) = req.display_order {
            category.display_order = display_order;
        }

        Ok(category.clone())
    }

    async fn delete_category(&self, _ctx: &Ctx, id: &str) -> Result<()> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let before = store.categories.len();
        store.categories.retain(|c| c.id != id);
        if store.categories.len() == before {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        Ok(())
    }

    async fn create_subcategory(
        &self,
        _ctx: &Ctx,
        req: &SubcategoryForCreate,
    ) -> Result<Subcategory> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let parent = store
            .categories
            .iter_mut()
            .find(|c| c.id == req.parent_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Parent category {} not found", req.parent_id))
            })?;

        let subcategory = Subcategory {
            id: new_id(),
            parent_id: req.parent_id.clone(),
            name: req.name.clone(),
            description: req.description.clone(),
            projects: 0,
            active: true,
            display_order: req
                .display_order
                .unwrap_or(parent.subcategories.len() as u32 + 1),
        };

        parent.subcategories.push(subcategory.clone());
        Ok(subcategory)
    }

    async fn list_transactions(&self, _ctx: &Ctx) -> Result<Vec<Transaction>> {
        self.simulate_latency().await;
        Ok(self.store.read().await.transactions.clone())
    }

    async fn dashboard_stats(&self, _ctx: &Ctx) -> Result<DashboardStats> {
        self.simulate_latency().await;
        Ok(dashboard_stats_snapshot())
    }

    async fn funding_stats(&self, _ctx: &Ctx) -> Result<FundingStats> {
        self.simulate_latency().await;
        Ok(funding_stats_snapshot())
    }

    async fn get_settings(&self, _ctx: &Ctx) -> Result<Settings> {
        self.simulate_latency().await;
        Ok(self.store.read().await.settings.clone())
    }

    async fn update_general_settings(
        &self,
        _ctx: &Ctx,
        settings: &GeneralSettings,
    ) -> Result<GeneralSettings> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;
        store.settings.general = settings.clone();
        Ok(settings.clone())
    }

    async fn update_email_settings(
        &self,
        _ctx: &Ctx,
        settings: &EmailSettings,
    ) -> Result<EmailSettings> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;
        store.settings.email = settings.clone();
        Ok(settings.clone())
    }

    async fn update_security_settings(
        &self,
        _ctx: &Ctx,
        settings: &SecuritySettings,
    ) -> Result<SecuritySettings> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;
        store.settings.security = settings.clone();
        Ok(settings.clone())
    }

    async fn update_api_settings(&self, _ctx: &Ctx, settings: &ApiSettings) -> Result<ApiSettings> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;
        store.settings.api = settings.clone();
        Ok(settings.clone())
    }

    async fn generate_api_key(&self, _ctx: &Ctx, name: &str) -> Result<ApiKey> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let key = ApiKey {
            id: new_id(),
            name: name.to_string(),
            created: now_utc(),
            key: Some(format!("ss_live_{}", new_id())),
        };

        // The stored copy never retains the secret.
        store.settings.api_keys.push(ApiKey {
            key: None,
            ..key.clone()
        });

        Ok(key)
    }

    async fn revoke_api_key(&self, _ctx: &Ctx, id: &str) -> Result<()> {
        self.simulate_latency().await;
        let mut store = self.store.write().await;

        let before = store.settings.api_keys.len();
        store.settings.api_keys.retain(|k| k.id != id);
        if store.settings.api_keys.len() == before {
            return Err(AppError::NotFound(format!("API key {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ctx() -> Ctx {
        Ctx::new("mock-1", "admin", "Admin User", "admin", None)
    }

    #[tokio::test]
    async fn test_login_accepts_seed_credentials() {
        let api = MockApi::seeded();
        let user = api
            .login(&LoginRequest {
                login: "admin".to_string(),
                password: "admin123".to_string(),
            })
            .await
            .expect("Seed credentials should log in");

        assert_eq!(user.login, "admin");
        assert_eq!(user.role, "admin");
        assert!(user.token.is_none());
    }

    #[tokio::test]
    async fn test_login_rejects_bad_password() {
        let api = MockApi::seeded();
        let err = api
            .login(&LoginRequest {
                login: "admin".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .expect_err("Wrong password should be rejected");

        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_moderation_approve() {
        let api = MockApi::seeded();
        let ctx = test_ctx();

        let project = api
            .moderate_project(&ctx, "1", ModerationAction::Approve)
            .await
            .expect("Moderating a seeded project should succeed");

        assert!(project.moderated);
        assert_eq!(project.status, ProjectStatus::Active);
    }

    #[tokio::test]
    async fn test_moderation_reject_then_suspend() {
        let api = MockApi::seeded();
        let ctx = test_ctx();

        let rejected = api
            .moderate_project(&ctx, "3", ModerationAction::Reject)
            .await
            .expect("Reject should succeed");
        assert!(rejected.moderated);
        assert_eq!(rejected.status, ProjectStatus::Rejected);

        // Suspension flips status but leaves the moderation flag alone.
        let suspended = api
            .moderate_project(&ctx, "3", ModerationAction::Suspend)
            .await
            .expect("Suspend should succeed");
        assert!(suspended.moderated);
        assert_eq!(suspended.status, ProjectStatus::Suspended);
    }

    #[tokio::test]
    async fn test_moderation_repeat_is_idempotent() {
        let api = MockApi::seeded();
        let ctx = test_ctx();

        // Project 2 ships already reviewed and active.
        let approved = api
            .moderate_project(&ctx, "2", ModerationAction::Approve)
            .await
            .expect("Approve should succeed");
        assert!(approved.moderated);
        assert_eq!(approved.status, ProjectStatus::Active);

        // Project 5 ships already reviewed and rejected.
        let rejected = api
            .moderate_project(&ctx, "5", ModerationAction::Reject)
            .await
            .expect("Reject should succeed");
        assert!(rejected.moderated);
        assert_eq!(rejected.status, ProjectStatus::Rejected);
    }

    #[tokio::test]
    async fn test_moderation_unknown_project() {
        let api = MockApi::seeded();
        let err = api
            .moderate_project(&test_ctx(), "no-such-id", ModerationAction::Approve)
            .await
            .expect_err("Unknown project should be NotFound");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_project_visible_in_list() {
        let api = MockApi::seeded();
        let ctx = test_ctx();

        let created = api
            .create_project(
                &ctx,
                &ProjectForCreate {
                    title: "Paper Orrery".to_string(),
                    user_id: "1".to_string(),
                    subcategory_id: "102".to_string(),
                    description: "A hand-cut paper model of the solar system.".to_string(),
                    funding_goal: 5_000.0,
                    deadline: now_utc() + ChronoDuration::days(30),
                    status: None,
                },
            )
            .await
            .expect("Create should succeed");

        // Creator and category resolved from the seed data.
        assert_eq!(created.creator, "Thomas Noonan");
        assert_eq!(created.category, "Art");
        assert_eq!(created.progress, 0);

        let projects = api.list_projects(&ctx).await.expect("List should succeed");
        assert!(projects.iter().any(|p| p.id == created.id));
    }

    #[tokio::test]
    async fn test_update_project_recomputes_progress() {
        let api = MockApi::seeded();
        let ctx = test_ctx();

        // Project 1: 12,450 raised. Halving the goal doubles the progress.
        let updated = api
            .update_project(&ctx, "1", &ProjectForUpdate::new().funding_goal(5_000.0))
            .await
            .expect("Update should succeed");

        assert_eq!(updated.funding_goal, 5_000.0);
        assert_eq!(updated.progress, 249);
    }

    #[tokio::test]
    async fn test_delete_project_then_missing() {
        let api = MockApi::seeded();
        let ctx = test_ctx();

        api.delete_project(&ctx, "5")
            .await
            .expect("Delete should succeed");
        let err = api
            .get_project(&ctx, "5")
            .await
            .expect_err("Deleted project should be gone");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_user_reinstates_account() {
        let api = MockApi::seeded();
        let ctx = test_ctx();

        let updated = api
            .update_user(&ctx, "6", &UserForUpdate::new().status(AccountStatus::Active))
            .await
            .expect("Update should succeed");

        assert_eq!(updated.status, AccountStatus::Active);
        // Fields not addressed by the update survive.
        assert_eq!(updated.name, "Viktor Hale");
        assert_eq!(updated.email, "viktor@example.com");
    }

    #[tokio::test]
    async fn test_update_category_partial() {
        let api = MockApi::seeded();
        let ctx = test_ctx();

        let updated = api
            .update_category(
                &ctx,
                "1",
                &CategoryForUpdate::new()
                    .name("Art & Design".to_string())
                    .featured(false),
            )
            .await
            .expect("Update should succeed");

        assert_eq!(updated.name, "Art & Design");
        assert!(!updated.featured);
        assert!(updated.active);
        assert_eq!(updated.display_order, 1);
    }

    #[tokio::test]
    async fn test_subcategory_requires_parent() {
        let api = MockApi::seeded();
        let err = api
            .create_subcategory(
                &test_ctx(),
                &SubcategoryForCreate {
                    parent_id: "no-such-category".to_string(),
                    name: "Orphan".to_string(),
                    description: String::new(),
                    display_order: None,
                },
            )
            .await
            .expect_err("Missing parent should fail");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_subcategory_lands_under_parent() {
        let api = MockApi::seeded();
        let ctx = test_ctx();

        let sub = api
            .create_subcategory(
                &ctx,
                &SubcategoryForCreate {
                    parent_id: "2".to_string(),
                    name: "Webcomics".to_string(),
                    description: "Serialized online comics".to_string(),
                    display_order: None,
                },
            )
            .await
            .expect("Create should succeed");

        assert_eq!(sub.display_order, 2);

        let comics = api.get_category(&ctx, "2").await.expect("Parent should exist");
        assert!(comics.subcategories.iter().any(|s| s.id == sub.id));
    }

    #[tokio::test]
    async fn test_api_key_secret_shown_once() {
        let api = MockApi::seeded();
        let ctx = test_ctx();

        let generated = api
            .generate_api_key(&ctx, "CI Key")
            .await
            .expect("Key generation should succeed");
        assert!(generated
            .key
            .as_deref()
            .is_some_and(|k| k.starts_with("ss_live_")));

        let settings = api.get_settings(&ctx).await.expect("Settings should load");
        let stored = settings
            .api_keys
            .iter()
            .find(|k| k.id == generated.id)
            .expect("Generated key should be listed");
        assert!(stored.key.is_none());
    }

    #[tokio::test]
    async fn test_settings_update_touches_one_section() {
        let api = MockApi::seeded();
        let ctx = test_ctx();

        let mut general = GeneralSettings::default();
        general.maintenance_mode = true;
        api.update_general_settings(&ctx, &general)
            .await
            .expect("Update should succeed");

        let settings = api.get_settings(&ctx).await.expect("Settings should load");
        assert!(settings.general.maintenance_mode);
        assert_eq!(settings.email, EmailSettings::default());
    }
}
