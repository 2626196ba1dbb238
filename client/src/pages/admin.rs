//! Admin dashboard — tabbed summary, user management, rates, and export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-only route; non-admins bounce back to `/`. Each tab is its own
//! component that loads its data when first shown. Deleting the seeded
//! `admin` account is blocked client-side, no request is sent.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use shared::{AnnualRate, Summary, User};

use crate::state::auth::AuthState;
use crate::state::ui::{AdminTab, UiState};
use crate::util;
use crate::util::dates::{current_year_month, format_date, month_name, selectable_years};
use crate::util::hours::parse_decimal;

// =============================================================================
// PURE HELPERS
// =============================================================================

/// The seeded `admin` account must not be deletable from the UI.
pub(crate) fn can_delete_user(username: &str) -> bool {
    username != "admin"
}

/// Client-side filename for a spreadsheet download.
pub(crate) fn download_filename(month: Option<(i32, u8)>) -> String {
    match month {
        None => "horas_penosas_export.xlsx".to_owned(),
        Some((year, month)) => format!("horas_penosas_{year}_{month:02}.xlsx"),
    }
}

/// Parse the rate form fields into an upsert payload.
pub(crate) fn parse_rate_form(year_raw: &str, rate_raw: &str) -> Result<AnnualRate, &'static str> {
    let year: i32 = year_raw
        .trim()
        .parse()
        .map_err(|_| "El año no es válido")?;
    if !(2000..=2100).contains(&year) {
        return Err("El año no es válido");
    }
    let rate = parse_decimal(rate_raw).ok_or("La tarifa no es válida")?;
    if rate <= 0.0 {
        return Err("La tarifa debe ser mayor que cero");
    }
    Ok(AnnualRate { year, rate })
}

// =============================================================================
// PAGE
// =============================================================================

/// Admin dashboard page with tab navigation.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    util::auth::install_guard(auth, true, navigate);

    let on_logout = move |_| {
        util::auth::clear_token();
        auth.set(AuthState::signed_out());
        #[cfg(feature = "csr")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().is_admin()
            fallback=move || {
                view! {
                    <div class="admin-page">
                        <p>{move || if auth.get().loading { "Cargando..." } else { "Redirigiendo..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin-page">
                <header class="admin-page__header toolbar">
                    <div class="toolbar__identity">
                        <h2>"Panel de Administración"</h2>
                        <p class="toolbar__subtitle">"Resumen global de actividad"</p>
                    </div>
                    <span class="toolbar__spacer"></span>
                    <A href="/" attr:class="btn toolbar__back-link">
                        "Mi Dashboard"
                    </A>
                    <button class="btn toolbar__logout" on:click=on_logout>
                        "Cerrar Sesión"
                    </button>
                </header>

                <nav class="admin-tabs">
                    {AdminTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="admin-tabs__tab"
                                    class=("admin-tabs__tab--active", move || ui.get().admin_tab == tab)
                                    on:click=move |_| ui.update(|u| u.admin_tab = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                {move || match ui.get().admin_tab {
                    AdminTab::Resumen => view! { <SummaryTab/> }.into_any(),
                    AdminTab::Usuarios => view! { <UsersTab/> }.into_any(),
                    AdminTab::Tarifas => view! { <RatesTab/> }.into_any(),
                    AdminTab::Exportar => view! { <ExportTab/> }.into_any(),
                }}
            </div>
        </Show>
    }
}

// =============================================================================
// SUMMARY TAB
// =============================================================================

fn load_summary(auth: RwSignal<AuthState>, summary: RwSignal<Option<Summary>>) {
    #[cfg(feature = "csr")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_summary(&token).await {
                Ok(s) => summary.set(Some(s)),
                Err(e) => log::warn!("error fetching summary: {e}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, summary);
    }
}

#[component]
fn SummaryTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let summary = RwSignal::new(None::<Summary>);

    load_summary(auth, summary);

    view! {
        <div class="admin-summary">
            <div class="admin-summary__cards">
                <div class="stat-card card">
                    <span class="stat-card__label">"Usuarios Totales"</span>
                    <span class="stat-card__value">
                        {move || summary.get().map(|s| s.total_users).unwrap_or_default()}
                    </span>
                </div>
                <div class="stat-card card">
                    <span class="stat-card__label">"Entradas Registradas"</span>
                    <span class="stat-card__value">
                        {move || summary.get().map(|s| s.total_entries).unwrap_or_default()}
                    </span>
                </div>
            </div>

            <div class="admin-activity card">
                <h3>"Actividad Reciente"</h3>
                <Show
                    when=move || summary.get().is_some_and(|s| !s.recent_activity.is_empty())
                    fallback=|| view! { <p class="admin-activity__empty">"No hay actividad reciente"</p> }
                >
                    <div class="admin-activity__rows">
                        {move || {
                            summary
                                .get()
                                .map(|s| s.recent_activity)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="activity-row">
                                            <strong>{item.worker.clone()}</strong>
                                            <span class="activity-row__text">" registró horas para "</span>
                                            <span class="badge badge--task">{item.task.as_str()}</span>
                                            <span class="activity-row__date">{format_date(item.date)}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>
        </div>
    }
}

// =============================================================================
// USERS TAB
// =============================================================================

fn load_users(auth: RwSignal<AuthState>, users: RwSignal<Vec<User>>) {
    #[cfg(feature = "csr")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users(&token).await {
                Ok(list) => users.set(list),
                Err(e) => log::warn!("error fetching users: {e}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, users);
    }
}

#[component]
fn UsersTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = RwSignal::new(Vec::<User>::new());
    let delete_target = RwSignal::new(None::<User>);
    let delete_busy = RwSignal::new(false);

    load_users(auth, users);

    view! {
        <div class="admin-users card">
            <h3>"Usuarios"</h3>
            <Show
                when=move || !users.get().is_empty()
                fallback=|| view! { <p class="admin-users__empty">"Sin usuarios"</p> }
            >
                <div class="admin-users__rows">
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|user| {
                                let deletable = can_delete_user(&user.username);
                                let user_for_dialog = user.clone();
                                view! {
                                    <div class="user-row">
                                        <span class="user-row__name">
                                            {user.full_name.clone().unwrap_or_else(|| user.username.clone())}
                                        </span>
                                        <span class="user-row__username">{user.username.clone()}</span>
                                        <span class="badge badge--role">{user.role.as_str()}</span>
                                        <button
                                            class="btn user-row__delete"
                                            disabled=!deletable
                                            title=if deletable { "" } else { "El administrador no se puede borrar" }
                                            on:click=move |_| {
                                                if can_delete_user(&user_for_dialog.username) {
                                                    delete_target.set(Some(user_for_dialog.clone()));
                                                }
                                            }
                                        >
                                            "Borrar"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                <DeleteUserDialog target=delete_target busy=delete_busy auth=auth users=users/>
            </Show>
        </div>
    }
}

/// Confirm dialog for deleting one user (and, by cascade, their entries).
#[component]
fn DeleteUserDialog(
    target: RwSignal<Option<User>>,
    busy: RwSignal<bool>,
    auth: RwSignal<AuthState>,
    users: RwSignal<Vec<User>>,
) -> impl IntoView {
    let on_cancel = move |_| {
        if !busy.get() {
            target.set(None);
        }
    };

    let on_confirm = move |_| {
        if busy.get() {
            return;
        }
        let Some(user) = target.get_untracked() else {
            return;
        };
        if !can_delete_user(&user.username) {
            target.set(None);
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let Some(token) = auth.get_untracked().token else {
                busy.set(false);
                return;
            };
            match crate::net::api::delete_user(&token, user.id).await {
                Ok(()) => load_users(auth, users),
                Err(e) => util::alert(&format!("Error al borrar usuario: {e}")),
            }
            target.set(None);
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = user;
            target.set(None);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Borrar Usuario"</h2>
                <p class="dialog__danger">
                    "Se borrará "
                    <strong>
                        {move || target.get().map(|u| u.username).unwrap_or_default()}
                    </strong>
                    " y todas sus entradas. Esta acción no se puede deshacer."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=on_cancel disabled=move || busy.get()>
                        "Cancelar"
                    </button>
                    <button class="btn btn--danger" on:click=on_confirm disabled=move || busy.get()>
                        {move || if busy.get() { "Borrando..." } else { "Borrar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

// =============================================================================
// RATES TAB
// =============================================================================

fn load_rates(auth: RwSignal<AuthState>, rates: RwSignal<Vec<AnnualRate>>) {
    #[cfg(feature = "csr")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_rates(&token).await {
                Ok(list) => rates.set(list),
                Err(e) => log::warn!("error fetching rates: {e}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, rates);
    }
}

#[component]
fn RatesTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let rates = RwSignal::new(Vec::<AnnualRate>::new());

    let (current_year, _) = current_year_month();
    let year_field = RwSignal::new(current_year.to_string());
    let rate_field = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    load_rates(auth, rates);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let rate = match parse_rate_form(&year_field.get(), &rate_field.get()) {
            Ok(r) => r,
            Err(msg) => {
                form_error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        form_error.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let Some(token) = auth.get_untracked().token else {
                busy.set(false);
                return;
            };
            match crate::net::api::save_rate(&token, rate).await {
                Ok(_) => {
                    rate_field.set(String::new());
                    load_rates(auth, rates);
                }
                Err(e) => form_error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = rate;
            busy.set(false);
        }
    };

    view! {
        <div class="admin-rates card">
            <h3>"Tarifas por Año"</h3>
            <div class="admin-rates__rows">
                {move || {
                    rates
                        .get()
                        .into_iter()
                        .map(|r| {
                            view! {
                                <div class="rate-row">
                                    <span class="rate-row__year">{r.year}</span>
                                    <span class="rate-row__rate">{format!("{:.2} €/h", r.rate)}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <form class="admin-rates__form" on:submit=on_submit>
                <label class="admin-rates__label">
                    "Año"
                    <input
                        class="admin-rates__input"
                        type="number"
                        prop:value=move || year_field.get()
                        on:input=move |ev| year_field.set(event_target_value(&ev))
                    />
                </label>
                <label class="admin-rates__label">
                    "€ por hora"
                    <input
                        class="admin-rates__input"
                        type="text"
                        inputmode="decimal"
                        placeholder="12,50"
                        prop:value=move || rate_field.get()
                        on:input=move |ev| rate_field.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Guardando..." } else { "Guardar Tarifa" }}
                </button>
            </form>
            <Show when=move || !form_error.get().is_empty()>
                <p class="admin-rates__error">{move || form_error.get()}</p>
            </Show>
        </div>
    }
}

// =============================================================================
// EXPORT TAB
// =============================================================================

#[component]
fn ExportTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let (current_year, current_month) = current_year_month();
    let sel_year = RwSignal::new(current_year);
    let sel_month = RwSignal::new(current_month);
    let busy_full = RwSignal::new(false);
    let busy_month = RwSignal::new(false);

    let on_export_full = move |_| {
        if busy_full.get() {
            return;
        }
        busy_full.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let Some(token) = auth.get_untracked().token else {
                busy_full.set(false);
                return;
            };
            match crate::net::api::download_export(&token).await {
                Ok(bytes) => {
                    if let Err(e) = util::download::save_bytes(&download_filename(None), &bytes) {
                        util::alert(&format!("Error al exportar: {e}"));
                    }
                }
                Err(e) => util::alert(&format!("Error al exportar: {e}")),
            }
            busy_full.set(false);
        });
        #[cfg(not(feature = "csr"))]
        busy_full.set(false);
    };

    let on_export_month = move |_| {
        if busy_month.get() {
            return;
        }
        busy_month.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let Some(token) = auth.get_untracked().token else {
                busy_month.set(false);
                return;
            };
            let year = sel_year.get_untracked();
            let month = sel_month.get_untracked();
            match crate::net::api::download_month_export(&token, year, month).await {
                Ok(bytes) => {
                    let filename = download_filename(Some((year, month)));
                    if let Err(e) = util::download::save_bytes(&filename, &bytes) {
                        util::alert(&format!("Error al exportar: {e}"));
                    }
                }
                Err(e) => util::alert(&format!("Error al exportar: {e}")),
            }
            busy_month.set(false);
        });
        #[cfg(not(feature = "csr"))]
        busy_month.set(false);
    };

    view! {
        <div class="admin-export card">
            <h3>"Exportar a Excel"</h3>

            <div class="admin-export__block">
                <p>"Todas las entradas de todos los trabajadores."</p>
                <button class="btn btn--primary" on:click=on_export_full disabled=move || busy_full.get()>
                    {move || if busy_full.get() { "Procesando..." } else { "Descargar todo" }}
                </button>
            </div>

            <div class="admin-export__block">
                <p>"Un mes concreto."</p>
                <div class="admin-export__month">
                    <select
                        class="admin-export__select"
                        on:change=move |ev| {
                            if let Ok(m) = event_target_value(&ev).parse::<u8>() {
                                sel_month.set(m);
                            }
                        }
                    >
                        {(1..=12u8)
                            .map(|m| {
                                view! {
                                    <option value=m.to_string() selected=move || sel_month.get() == m>
                                        {month_name(m)}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="admin-export__select"
                        on:change=move |ev| {
                            if let Ok(y) = event_target_value(&ev).parse::<i32>() {
                                sel_year.set(y);
                            }
                        }
                    >
                        {selectable_years(current_year)
                            .into_iter()
                            .map(|y| {
                                view! {
                                    <option value=y.to_string() selected=move || sel_year.get() == y>
                                        {y}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn" on:click=on_export_month disabled=move || busy_month.get()>
                        {move || if busy_month.get() { "Procesando..." } else { "Descargar mes" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
