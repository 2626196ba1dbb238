use super::*;
use shared::{Role, User};

fn worker_state() -> AuthState {
    AuthState::authenticated(
        User { id: 1, username: "demo1".to_owned(), full_name: None, role: Role::Worker },
        "tok".to_owned(),
    )
}

fn admin_state() -> AuthState {
    AuthState::authenticated(
        User { id: 2, username: "admin".to_owned(), full_name: None, role: Role::Admin },
        "tok".to_owned(),
    )
}

#[test]
fn no_redirect_while_loading() {
    let state = AuthState::default();
    assert_eq!(guard_redirect(&state, false), None);
    assert_eq!(guard_redirect(&state, true), None);
}

#[test]
fn anonymous_user_goes_to_login() {
    let state = AuthState::signed_out();
    assert_eq!(guard_redirect(&state, false), Some("/login"));
    assert_eq!(guard_redirect(&state, true), Some("/login"));
}

#[test]
fn worker_allowed_on_dashboard_but_not_admin() {
    let state = worker_state();
    assert_eq!(guard_redirect(&state, false), None);
    assert_eq!(guard_redirect(&state, true), Some("/"));
}

#[test]
fn admin_allowed_everywhere() {
    let state = admin_state();
    assert_eq!(guard_redirect(&state, false), None);
    assert_eq!(guard_redirect(&state, true), None);
}
