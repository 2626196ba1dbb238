//! Token persistence and route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token lives in `localStorage` so a reload keeps the session.
//! Route components apply identical redirect behavior through one pure
//! decision function: unauthenticated users land on `/login`, non-admins
//! visiting the admin area land back on `/`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

#[cfg(feature = "csr")]
const TOKEN_KEY: &str = "horas_penosas_token";

/// Read the persisted bearer token, if any.
#[must_use]
pub fn load_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(TOKEN_KEY).ok()?.filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the bearer token for future visits.
pub fn store_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token (logout teardown).
pub fn clear_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// Where a visitor on a guarded route must be sent, if anywhere.
///
/// `None` while hydration is still loading or when access is allowed.
#[must_use]
pub fn guard_redirect(state: &AuthState, admin_only: bool) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    if state.user.is_none() {
        return Some("/login");
    }
    if admin_only && !state.is_admin() {
        return Some("/");
    }
    None
}

/// Install the redirect effect for a guarded route component.
pub fn install_guard<F>(auth: RwSignal<AuthState>, admin_only: bool, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some(target) = guard_redirect(&state, admin_only) {
            navigate(target, NavigateOptions::default());
        }
    });
}
