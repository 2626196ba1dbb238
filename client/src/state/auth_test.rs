use super::*;
use shared::Role;

fn worker() -> User {
    User { id: 1, username: "demo1".to_owned(), full_name: None, role: Role::Worker }
}

fn admin() -> User {
    User { id: 2, username: "admin".to_owned(), full_name: Some("System Admin".to_owned()), role: Role::Admin }
}

#[test]
fn default_state_is_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn authenticated_state_holds_user_and_token() {
    let state = AuthState::authenticated(worker(), "tok".to_owned());
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("tok"));
    assert!(!state.is_admin());
}

#[test]
fn signed_out_clears_everything() {
    let state = AuthState::signed_out();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn admin_flag_follows_role() {
    assert!(AuthState::authenticated(admin(), "tok".to_owned()).is_admin());
    assert!(!AuthState::default().is_admin());
}
