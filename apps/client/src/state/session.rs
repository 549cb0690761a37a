//! # Session State
//!
//! Shared authentication state.
//!
//! Owned by the external login/logout flow; pages only take snapshot reads.
//! A session counts as authenticated iff the stored user carries a non-empty
//! identifier (the rule lives on [`Session`] in liber-core).

use std::sync::{Arc, RwLock};

use tracing::debug;

use liber_core::{Session, UserProfile};

/// Shared handle to the authentication state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    inner: Arc<RwLock<Session>>,
}

impl SessionState {
    /// Creates a logged-out session state.
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Stores the authenticated user. Called by the external login flow.
    pub fn login(&self, user: UserProfile) {
        let mut session = self.inner.write().expect("Session lock poisoned");
        debug!(user_id = ?user.id, "session user set");
        *session = Session::authenticated(user);
    }

    /// Clears the authenticated user.
    pub fn logout(&self) {
        let mut session = self.inner.write().expect("Session lock poisoned");
        *session = Session::anonymous();
    }

    /// A point-in-time copy of the session.
    pub fn snapshot(&self) -> Session {
        self.inner.read().expect("Session lock poisoned").clone()
    }

    /// Returns true if a user with an identifier is present.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .expect("Session lock poisoned")
            .is_authenticated()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout_roundtrip() {
        let state = SessionState::new();
        assert!(!state.is_authenticated());

        state.login(UserProfile {
            id: Some("u-1".to_string()),
            first_name: "Ann".to_string(),
            ..UserProfile::default()
        });
        assert!(state.is_authenticated());
        assert_eq!(
            state.snapshot().user.map(|u| u.first_name),
            Some("Ann".to_string())
        );

        state.logout();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_snapshot_is_point_in_time() {
        let state = SessionState::new();
        let before = state.snapshot();

        state.login(UserProfile {
            id: Some("u-1".to_string()),
            ..UserProfile::default()
        });

        // The earlier snapshot is unaffected by the later login.
        assert!(!before.is_authenticated());
        assert!(state.snapshot().is_authenticated());
    }
}
