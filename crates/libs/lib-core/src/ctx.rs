//! # Request Context
//!
//! The authenticated admin identity for the current request, built once by
//! the session middleware and passed explicitly to every service call.
//! Nothing below the middleware reads session state from anywhere else.

/// Authenticated request context.
#[derive(Clone, Debug)]
pub struct Ctx {
    admin_id: String,
    login: String,
    name: String,
    role: String,
    upstream_token: Option<String>,
}

impl Ctx {
    pub fn new(
        admin_id: impl Into<String>,
        login: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        upstream_token: Option<String>,
    ) -> Self {
        Self {
            admin_id: admin_id.into(),
            login: login.into(),
            name: name.into(),
            role: role.into(),
            upstream_token,
        }
    }

    pub fn admin_id(&self) -> &str {
        &self.admin_id
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Bearer token for the upstream API, absent for mock sessions.
    pub fn upstream_token(&self) -> Option<&str> {
        self.upstream_token.as_deref()
    }
}
