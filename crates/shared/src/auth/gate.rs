use crate::auth::{AuthContext, SessionUser};

/// Decide whether `user` may exercise `required`.
///
/// No session user denies. The admin role allows unconditionally. Everyone
/// else needs `required` to be a member of their permission set; an empty
/// set denies everything.
///
/// Pure function of session state, no IO.
pub fn has_permission(user: Option<&SessionUser>, required: &str) -> bool {
    match user {
        None => false,
        Some(user) if user.is_admin() => true,
        Some(user) => user.permissions.contains(required),
    }
}

/// Two-branch selector over the gate decision.
///
/// The server-side counterpart of conditionally rendered UI: callers hand in
/// both outcomes and the gate picks one.
pub struct PermissionGate<'a> {
    ctx: &'a AuthContext,
}

impl<'a> PermissionGate<'a> {
    pub fn new(ctx: &'a AuthContext) -> Self {
        Self { ctx }
    }

    pub fn allows(&self, required: &str) -> bool {
        has_permission(self.ctx.user(), required)
    }

    /// Pick `allowed` or `fallback` based on the decision for `required`.
    pub fn select<T>(
        &self,
        required: &str,
        allowed: impl FnOnce() -> T,
        fallback: impl FnOnce() -> T,
    ) -> T {
        if self.allows(required) {
            allowed()
        } else {
            fallback()
        }
    }

    /// Like [`select`](Self::select), with the type's `Default` standing in
    /// for the fallback branch.
    pub fn select_or_default<T: Default>(&self, required: &str, allowed: impl FnOnce() -> T) -> T {
        self.select(required, allowed, T::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn user(role: &str, permissions: &[&str]) -> SessionUser {
        SessionUser {
            id: "1".to_string(),
            role: role.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn no_user_denies_everything() {
        assert!(!has_permission(None, "customers.read"));
        assert!(!has_permission(None, ""));
    }

    #[test]
    fn admin_role_allows_everything() {
        let admin = user("admin", &[]);
        for permission in ["customers.read", "reports.read", "anything.at.all"] {
            assert!(has_permission(Some(&admin), permission));
        }
    }

    #[test]
    fn membership_decides_for_everyone_else() {
        let staff = user("staff", &["a", "b"]);
        assert!(has_permission(Some(&staff), "a"));
        assert!(has_permission(Some(&staff), "b"));
        assert!(!has_permission(Some(&staff), "c"));
    }

    #[test]
    fn empty_permission_set_denies() {
        let staff = SessionUser {
            id: "1".to_string(),
            role: "staff".to_string(),
            permissions: HashSet::new(),
        };
        assert!(!has_permission(Some(&staff), "a"));
    }

    #[test]
    fn select_picks_the_allowed_branch() {
        let ctx = AuthContext::authenticated(user("staff", &["reports.read"]));
        let gate = PermissionGate::new(&ctx);

        assert_eq!(gate.select("reports.read", || "full", || "summary"), "full");
        assert_eq!(
            gate.select("customers.restore", || "full", || "summary"),
            "summary"
        );
    }

    #[test]
    fn select_or_default_falls_back_to_empty_output() {
        let ctx = AuthContext::anonymous();
        let gate = PermissionGate::new(&ctx);

        let rendered: Vec<&str> = gate.select_or_default("reports.read", || vec!["widget"]);
        assert!(rendered.is_empty());
    }
}
