//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::pages::{admin::AdminPage, dashboard::DashboardPage, login::LoginPage, profile::ProfilePage};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util;

/// Root application component.
///
/// Constructs the shared state contexts with an explicit lifecycle: auth
/// starts in `loading`, hydrates the persisted token into a user, and is
/// cleared again on logout. Children read both contexts via `expect_context`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState {
        dark_mode: util::dark_mode::read_preference(),
        ..UiState::default()
    });

    provide_context(auth);
    provide_context(ui);

    // Apply the persisted theme before first paint.
    util::dark_mode::apply(ui.get_untracked().dark_mode);

    // Session hydration: resolve the stored token to a user, or settle into
    // the signed-out state so route guards can act.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match util::auth::load_token() {
            Some(token) => match crate::net::api::fetch_current_user(&token).await {
                Some(user) => auth.set(AuthState::authenticated(user, token)),
                None => {
                    util::auth::clear_token();
                    auth.set(AuthState::signed_out());
                }
            },
            None => auth.set(AuthState::signed_out()),
        }
    });
    #[cfg(not(feature = "csr"))]
    auth.update(|a| a.loading = false);

    view! {
        <Title text="Horas Penosas"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
