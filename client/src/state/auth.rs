//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once in the root `App` component and provided via context.
//! Init hydrates the bearer token from `localStorage` and resolves it to a
//! user; logout clears both. Route guards and user-aware components read
//! this to coordinate redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use shared::User;

/// Authentication state tracking the current user, bearer token, and the
/// initial hydration status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts in `loading` until the persisted token has been resolved, so
    /// guards do not bounce to `/login` before hydration finishes.
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

impl AuthState {
    /// State after a successful login or session hydration.
    #[must_use]
    pub fn authenticated(user: User, token: String) -> Self {
        Self { user: Some(user), token: Some(token), loading: false }
    }

    /// State after logout or a failed hydration.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, token: None, loading: false }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}
