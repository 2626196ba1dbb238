//! Worker dashboard — month-filtered entry list, entry form, monthly stats.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Entries reload whenever the
//! month selector changes or a mutation succeeds; the entry form doubles as
//! the editor for an existing entry. Submit and delete controls disable
//! while their request is in flight.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use shared::{MonthlyStat, Shift, Task, WorkEntry, WorkEntryPayload};

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util;
use crate::util::dates::{
    current_year_month, format_date, month_name, parse_date, selectable_years, today_value,
    validate_entry_year,
};
use crate::util::hours::{HoursInput, format_decimal, sanitize_decimal};

// =============================================================================
// PURE FORM LOGIC
// =============================================================================

/// Assemble and validate the submission payload from the form fields.
pub(crate) fn build_payload(
    date_raw: &str,
    shift: Shift,
    task: Task,
    hours: &HoursInput,
    current_year: i32,
) -> Result<WorkEntryPayload, String> {
    let date = parse_date(date_raw).ok_or_else(|| "La fecha no es válida".to_owned())?;
    validate_entry_year(date, current_year)?;
    let amount = hours.resolve_amount().map_err(str::to_owned)?;
    Ok(WorkEntryPayload { date, shift, task, amount })
}

/// Total logged hours for the displayed list.
pub(crate) fn total_hours(entries: &[WorkEntry]) -> f64 {
    entries.iter().map(|e| e.amount).sum()
}

/// Bar width for the stats chart, as a percentage of the busiest month.
pub(crate) fn bar_width_pct(value: f64, max: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).min(100.0)
    }
}

// =============================================================================
// DATA LOADING
// =============================================================================

fn load_entries(auth: RwSignal<AuthState>, entries: RwSignal<Vec<WorkEntry>>, year: i32, month: u8) {
    #[cfg(feature = "csr")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::list_entries(&token, Some(year), Some(month)).await {
                Ok(list) => entries.set(list),
                Err(e) => log::warn!("error fetching entries: {e}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, entries, year, month);
    }
}

fn load_stats(auth: RwSignal<AuthState>, stats: RwSignal<Vec<MonthlyStat>>) {
    #[cfg(feature = "csr")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_monthly_stats(&token).await {
                Ok(list) => stats.set(list),
                Err(e) => log::warn!("error fetching stats: {e}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, stats);
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// Worker dashboard page. Redirects to `/login` when not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    util::auth::install_guard(auth, false, navigate);

    let (initial_year, initial_month) = current_year_month();
    let sel_year = RwSignal::new(initial_year);
    let sel_month = RwSignal::new(initial_month);

    let entries = RwSignal::new(Vec::<WorkEntry>::new());
    let stats = RwSignal::new(Vec::<MonthlyStat>::new());

    // Entry form state. `edit_id` switches the form into update mode.
    let date = RwSignal::new(today_value());
    let shift = RwSignal::new(Shift::default());
    let task = RwSignal::new(Task::default());
    let hours = RwSignal::new(HoursInput::default());
    let edit_id = RwSignal::new(None::<i64>);
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let delete_target = RwSignal::new(None::<i64>);
    let delete_busy = RwSignal::new(false);

    // Reload the list when the session resolves or the selector moves.
    Effect::new(move || {
        let state = auth.get();
        if state.user.is_none() {
            return;
        }
        load_entries(auth, entries, sel_year.get(), sel_month.get());
    });
    Effect::new(move || {
        if auth.get().user.is_some() {
            load_stats(auth, stats);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (current_year, _) = current_year_month();
        let payload = match build_payload(&date.get(), shift.get(), task.get(), &hours.get(), current_year) {
            Ok(p) => p,
            Err(msg) => {
                form_error.set(msg);
                return;
            }
        };
        busy.set(true);
        form_error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let editing = edit_id.get_untracked();
            leptos::task::spawn_local(async move {
                let Some(token) = auth.get_untracked().token else {
                    busy.set(false);
                    return;
                };
                let result = match editing {
                    Some(id) => crate::net::api::update_entry(&token, id, &payload).await,
                    None => crate::net::api::create_entry(&token, &payload).await,
                };
                match result {
                    Ok(_) => {
                        edit_id.set(None);
                        hours.set(HoursInput::default());
                        load_entries(auth, entries, sel_year.get_untracked(), sel_month.get_untracked());
                        load_stats(auth, stats);
                    }
                    Err(e) => form_error.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            busy.set(false);
        }
    };

    let on_cancel_edit = move |_| {
        edit_id.set(None);
        hours.set(HoursInput::default());
        form_error.set(String::new());
    };

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

    let greeting = move || {
        auth.get()
            .user
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    // Reactive views over the hours union, so the mounted inputs track the
    // current variant without being rebuilt on every keystroke.
    let decimal_mode = move || matches!(hours.get(), HoursInput::Decimal(_));
    let decimal_text = move || match hours.get() {
        HoursInput::Decimal(raw) => raw,
        HoursInput::TimePair { .. } => String::new(),
    };
    let pair_hours_text = move || match hours.get() {
        HoursInput::TimePair { hours: h, .. } => h,
        HoursInput::Decimal(_) => String::new(),
    };
    let pair_minutes_text = move || match hours.get() {
        HoursInput::TimePair { minutes: m, .. } => m,
        HoursInput::Decimal(_) => String::new(),
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Cargando..." } else { "Redirigiendo..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <div class="toolbar__identity">
                        <h2>"Hola, " {greeting}</h2>
                        <p class="toolbar__subtitle">"Registra tus horas de hoy"</p>
                    </div>

                    <span class="toolbar__spacer"></span>

                    <Show when=move || auth.get().is_admin()>
                        <A href="/admin" attr:class="btn toolbar__admin-link">
                            "Panel Admin"
                        </A>
                    </Show>
                    <A href="/profile" attr:class="btn toolbar__profile-link">
                        "Perfil"
                    </A>
                    <button
                        class="btn toolbar__dark-toggle"
                        on:click=move |_| {
                            let next = util::dark_mode::toggle(ui.get().dark_mode);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Cambiar tema"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                    <button class="btn toolbar__logout" on:click=on_logout>
                        "Cerrar Sesión"
                    </button>
                </header>

                <div class="dashboard-page__grid">
                    <section class="entry-form card">
                        <h3>
                            {move || if edit_id.get().is_some() { "Editar Entrada" } else { "Nueva Entrada" }}
                        </h3>
                        <form on:submit=on_submit>
                            <label class="entry-form__label">
                                "Fecha"
                                <input
                                    class="entry-form__input"
                                    type="date"
                                    prop:value=move || date.get()
                                    on:input=move |ev| date.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="entry-form__label">
                                "Turno"
                                <select
                                    class="entry-form__select"
                                    on:change=move |ev| {
                                        shift.set(Shift::from_str(&event_target_value(&ev)).unwrap_or_default());
                                    }
                                >
                                    {Shift::ALL
                                        .into_iter()
                                        .map(|s| {
                                            view! {
                                                <option value=s.as_str() selected=move || shift.get() == s>
                                                    {s.as_str()}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <label class="entry-form__label">
                                "Tarea"
                                <select
                                    class="entry-form__select"
                                    on:change=move |ev| {
                                        task.set(Task::from_str(&event_target_value(&ev)).unwrap_or_default());
                                    }
                                >
                                    {Task::ALL
                                        .into_iter()
                                        .map(|t| {
                                            view! {
                                                <option value=t.as_str() selected=move || task.get() == t>
                                                    {t.as_str()}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <div class="entry-form__label">
                                "Horas"
                                <Show
                                    when=decimal_mode
                                    fallback=move || {
                                        view! {
                                            <div class="entry-form__pair">
                                                <input
                                                    class="entry-form__input entry-form__input--pair"
                                                    type="number"
                                                    min="0"
                                                    prop:value=pair_hours_text
                                                    on:input=move |ev| {
                                                        hours.update(|cur| {
                                                            if let HoursInput::TimePair { hours, .. } = cur {
                                                                *hours = event_target_value(&ev);
                                                            }
                                                        });
                                                    }
                                                />
                                                <span class="entry-form__pair-sep">":"</span>
                                                <input
                                                    class="entry-form__input entry-form__input--pair"
                                                    type="number"
                                                    min="0"
                                                    max="59"
                                                    prop:value=pair_minutes_text
                                                    on:input=move |ev| {
                                                        hours.update(|cur| {
                                                            if let HoursInput::TimePair { minutes, .. } = cur {
                                                                *minutes = event_target_value(&ev);
                                                            }
                                                        });
                                                    }
                                                />
                                            </div>
                                        }
                                    }
                                >
                                    <input
                                        class="entry-form__input"
                                        type="text"
                                        inputmode="decimal"
                                        prop:value=decimal_text
                                        on:input=move |ev| {
                                            hours.set(HoursInput::Decimal(
                                                sanitize_decimal(&event_target_value(&ev)),
                                            ));
                                        }
                                    />
                                </Show>
                                <button
                                    class="btn entry-form__mode-toggle"
                                    type="button"
                                    on:click=move |_| hours.update(|h| *h = h.toggled())
                                >
                                    {move || match hours.get() {
                                        HoursInput::Decimal(_) => "Usar hh:mm",
                                        HoursInput::TimePair { .. } => "Usar decimal",
                                    }}
                                </button>
                            </div>

                            <Show when=move || !form_error.get().is_empty()>
                                <p class="entry-form__error">{move || form_error.get()}</p>
                            </Show>

                            <div class="entry-form__actions">
                                <Show when=move || edit_id.get().is_some()>
                                    <button class="btn" type="button" on:click=on_cancel_edit>
                                        "Cancelar"
                                    </button>
                                </Show>
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Guardando..." } else { "Guardar Horas" }}
                                </button>
                            </div>
                        </form>
                    </section>

                    <section class="entry-list card">
                        <div class="entry-list__header">
                            <h3>"Tus Entradas"</h3>
                            <div class="entry-list__filter">
                                <select
                                    class="entry-list__select"
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
                                    class="entry-list__select"
                                    on:change=move |ev| {
                                        if let Ok(y) = event_target_value(&ev).parse::<i32>() {
                                            sel_year.set(y);
                                        }
                                    }
                                >
                                    {selectable_years(initial_year)
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
                            </div>
                        </div>

                        <p class="entry-list__total">
                            "Total del mes: "
                            <strong>{move || format!("{:.2} h", total_hours(&entries.get()))}</strong>
                        </p>

                        <Show
                            when=move || !entries.get().is_empty()
                            fallback=|| view! { <p class="entry-list__empty">"No hay registros todavía"</p> }
                        >
                            <div class="entry-list__rows">
                                {move || {
                                    entries
                                        .get()
                                        .into_iter()
                                        .map(|entry| {
                                            let entry_id = entry.id;
                                            let entry_date = entry.date;
                                            let entry_shift = entry.shift;
                                            let entry_task = entry.task;
                                            let entry_amount = entry.amount;
                                            let on_edit = move |_| {
                                                date.set(format_date(entry_date));
                                                shift.set(entry_shift);
                                                task.set(entry_task);
                                                hours.set(HoursInput::Decimal(format_decimal(entry_amount)));
                                                edit_id.set(Some(entry_id));
                                                form_error.set(String::new());
                                            };
                                            view! {
                                                <div class="entry-row">
                                                    <span class="entry-row__date">{format_date(entry_date)}</span>
                                                    <span class="badge badge--shift">{entry_shift.as_str()}</span>
                                                    <span class="badge badge--task">{entry_task.as_str()}</span>
                                                    <span class="entry-row__amount">
                                                        {format!("{:.2}h", entry_amount)}
                                                    </span>
                                                    <button class="btn entry-row__edit" on:click=on_edit>
                                                        "Editar"
                                                    </button>
                                                    <button
                                                        class="btn entry-row__delete"
                                                        on:click=move |_| delete_target.set(Some(entry_id))
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
                    </section>
                </div>

                <section class="stats card">
                    <h3>"Últimos 6 meses"</h3>
                    <div class="stats__rows">
                        {move || {
                            let list = stats.get();
                            let max_hours = list.iter().map(|s| s.hours).fold(0.0_f64, f64::max);
                            list.into_iter()
                                .map(|s| {
                                    let pct = bar_width_pct(s.hours, max_hours);
                                    view! {
                                        <div class="stats-row">
                                            <span class="stats-row__name">{s.name.clone()}</span>
                                            <div class="stats-row__track">
                                                <div
                                                    class="stats-row__bar"
                                                    style:width=format!("{pct:.0}%")
                                                ></div>
                                            </div>
                                            <span class="stats-row__value">
                                                {format!("{:.2} h · {:.2} €", s.hours, s.euros)}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>

                <Show when=move || delete_target.get().is_some()>
                    <DeleteEntryDialog
                        target=delete_target
                        busy=delete_busy
                        auth=auth
                        entries=entries
                        stats=stats
                        sel_year=sel_year
                        sel_month=sel_month
                    />
                </Show>
            </div>
        </Show>
    }
}

/// Confirm dialog for deleting one entry.
#[component]
fn DeleteEntryDialog(
    target: RwSignal<Option<i64>>,
    busy: RwSignal<bool>,
    auth: RwSignal<AuthState>,
    entries: RwSignal<Vec<WorkEntry>>,
    stats: RwSignal<Vec<MonthlyStat>>,
    sel_year: RwSignal<i32>,
    sel_month: RwSignal<u8>,
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
        let Some(entry_id) = target.get_untracked() else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let Some(token) = auth.get_untracked().token else {
                busy.set(false);
                return;
            };
            match crate::net::api::delete_entry(&token, entry_id).await {
                Ok(()) => {
                    load_entries(auth, entries, sel_year.get_untracked(), sel_month.get_untracked());
                    load_stats(auth, stats);
                }
                Err(e) => util::alert(&format!("Error al borrar: {e}")),
            }
            target.set(None);
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = entry_id;
            target.set(None);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Borrar Entrada"</h2>
                <p class="dialog__danger">"¿Seguro que quieres borrar esta entrada?"</p>
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

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
