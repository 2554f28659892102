use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

/// Role that bypasses permission checks entirely.
pub const ADMIN_ROLE: &str = "admin";

/// Authenticated identity as the upstream reports it at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: String,
    pub role: String,
    #[serde(default)]
    pub permissions: HashSet<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Per-request authentication context.
///
/// Built by the session middleware once the credential is verified, torn
/// down on logout. Handlers receive it explicitly; nothing in the gateway
/// reads auth state out of a process-wide global.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    user: Option<SessionUser>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Logout teardown: clears the identity in place.
    pub fn clear(&mut self) {
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> SessionUser {
        SessionUser {
            id: "42".to_string(),
            role: role.to_string(),
            permissions: HashSet::new(),
        }
    }

    #[test]
    fn context_lifecycle() {
        let mut ctx = AuthContext::authenticated(user("admin"));
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.user().map(|u| u.id.as_str()), Some("42"));

        ctx.clear();
        assert!(!ctx.is_authenticated());
        assert!(ctx.user().is_none());
    }

    #[test]
    fn anonymous_context_has_no_user() {
        assert!(!AuthContext::anonymous().is_authenticated());
    }
}
