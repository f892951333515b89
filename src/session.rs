//! Session Store
//!
//! Holds the authenticated identity and bearer token for the page
//! session. Created once at app start and provided via context;
//! replaced wholesale on login, cleared on logout. Nothing is
//! persisted across reloads and logout makes no network call.

use leptos::prelude::*;

use crate::models::{TokenPair, User};

/// Plain session state, kept separate from the reactive wrapper so
/// the transitions stay unit-testable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl SessionState {
    /// Store the identity and the access half of the token pair.
    /// Overwrites any previous session.
    pub fn log_in(&mut self, user: User, tokens: TokenPair) {
        self.token = Some(tokens.access);
        self.user = Some(user);
    }

    /// Pure client-side reset; the token is simply discarded.
    pub fn log_out(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Reactive handle over the session, cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Session(RwSignal<SessionState>);

impl Session {
    pub fn new() -> Self {
        Self(RwSignal::new(SessionState::default()))
    }

    pub fn log_in(&self, user: User, tokens: TokenPair) {
        self.0.update(|state| state.log_in(user, tokens));
    }

    pub fn log_out(&self) {
        self.0.update(|state| state.log_out());
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.read().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.0.read().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.0.read().token.clone()
    }

    /// Admin affordances are gated on the server's role claim only.
    pub fn is_admin(&self) -> bool {
        self.0.read().user.as_ref().is_some_and(|u| u.is_admin)
    }
}

/// Get the session from context.
pub fn use_session() -> Session {
    expect_context::<Session>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            username: "alice".to_string(),
            is_admin: false,
        }
    }

    fn tokens() -> TokenPair {
        TokenPair {
            access: "access-token".to_string(),
            refresh: Some("refresh-token".to_string()),
        }
    }

    #[test]
    fn test_login_keeps_only_access_token() {
        let mut state = SessionState::default();
        state.log_in(alice(), tokens());

        assert!(state.is_authenticated());
        assert_eq!(state.user.as_ref().unwrap().username, "alice");
        // The refresh token is never retained.
        assert_eq!(state.token.as_deref(), Some("access-token"));
    }

    #[test]
    fn test_login_overwrites_previous_session() {
        let mut state = SessionState::default();
        state.log_in(alice(), tokens());
        state.log_in(
            User {
                username: "bob".to_string(),
                is_admin: true,
            },
            TokenPair {
                access: "bob-token".to_string(),
                refresh: None,
            },
        );

        assert_eq!(state.user.as_ref().unwrap().username, "bob");
        assert_eq!(state.token.as_deref(), Some("bob-token"));
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut state = SessionState::default();
        state.log_in(alice(), tokens());
        state.log_out();

        assert!(!state.is_authenticated());
        assert!(state.user.is_none());
        assert!(state.token.is_none());
    }
}
