use crate::auth::SessionUser;

/// Route unauthenticated sessions are sent to.
pub const LANDING_ROUTE: &str = "/";

/// Session lifecycle as observed from `(loading, user)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Session resolution still in flight; nothing may fire.
    Pending,
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    pub fn observe(loading: bool, user: Option<&SessionUser>) -> Self {
        if loading {
            SessionState::Pending
        } else if user.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }
}

/// One-shot redirect decision for a session.
///
/// Re-evaluated on every observation. Nothing fires while the session is
/// still loading; once it settles unauthenticated the landing route is
/// yielded exactly once, however many further observations arrive.
#[derive(Debug, Default)]
pub struct RedirectGuard {
    redirected: bool,
}

impl RedirectGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, loading: bool, user: Option<&SessionUser>) -> Option<&'static str> {
        match SessionState::observe(loading, user) {
            SessionState::Pending | SessionState::Authenticated => None,
            SessionState::Unauthenticated if self.redirected => None,
            SessionState::Unauthenticated => {
                self.redirected = true;
                Some(LANDING_ROUTE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn someone() -> SessionUser {
        SessionUser {
            id: "7".to_string(),
            role: "staff".to_string(),
            permissions: HashSet::new(),
        }
    }

    #[test]
    fn nothing_fires_while_loading() {
        let mut guard = RedirectGuard::new();
        assert_eq!(guard.observe(true, None), None);
        assert_eq!(guard.observe(true, Some(&someone())), None);
    }

    #[test]
    fn authenticated_sessions_never_redirect() {
        let mut guard = RedirectGuard::new();
        let user = someone();
        assert_eq!(guard.observe(false, Some(&user)), None);
        assert_eq!(guard.observe(false, Some(&user)), None);
    }

    #[test]
    fn unauthenticated_session_redirects_exactly_once() {
        let mut guard = RedirectGuard::new();
        assert_eq!(guard.observe(false, None), Some(LANDING_ROUTE));
        assert_eq!(guard.observe(false, None), None);
        assert_eq!(guard.observe(false, None), None);
    }

    #[test]
    fn pending_then_unauthenticated_fires_on_settle() {
        let mut guard = RedirectGuard::new();
        assert_eq!(guard.observe(true, None), None);
        assert_eq!(guard.observe(false, None), Some(LANDING_ROUTE));
    }
}
