//! Profile page — account details and password change.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util;

/// Check the password-change form before any request is sent.
pub(crate) fn validate_password_change(
    old_password: &str,
    new_password: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if old_password.is_empty() || new_password.is_empty() {
        return Err("Introduce la contraseña actual y la nueva");
    }
    if new_password != confirm {
        return Err("Las contraseñas nuevas no coinciden");
    }
    Ok(())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    util::auth::install_guard(auth, false, navigate);

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());

        if let Err(msg) = validate_password_change(&old_password.get(), &new_password.get(), &confirm.get()) {
            error.set(msg.to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let old_value = old_password.get_untracked();
            let new_value = new_password.get_untracked();
            leptos::task::spawn_local(async move {
                let Some(token) = auth.get_untracked().token else {
                    busy.set(false);
                    return;
                };
                match crate::net::api::change_password(&token, &old_value, &new_value).await {
                    Ok(()) => {
                        success.set("Contraseña actualizada correctamente".to_owned());
                        old_password.set(String::new());
                        new_password.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(e) => error.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        busy.set(false);
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="profile-page">
                        <p>{move || if auth.get().loading { "Cargando..." } else { "Redirigiendo..." }}</p>
                    </div>
                }
            }
        >
            <div class="profile-page">
                <A href="/" attr:class="btn profile-page__back">
                    "Volver al Dashboard"
                </A>

                <div class="profile-card card">
                    <h2>"Perfil de Usuario"</h2>
                    <div class="profile-card__identity">
                        <p class="profile-card__label">"Usuario"</p>
                        <p class="profile-card__username">
                            {move || auth.get().user.map(|u| u.username).unwrap_or_default()}
                        </p>
                        <Show when=move || auth.get().user.is_some_and(|u| u.full_name.is_some())>
                            <p class="profile-card__full-name">
                                {move || {
                                    auth.get().user.and_then(|u| u.full_name).unwrap_or_default()
                                }}
                            </p>
                        </Show>
                    </div>

                    <h3>"Cambiar Contraseña"</h3>
                    <Show when=move || !error.get().is_empty()>
                        <p class="profile-card__message profile-card__message--error">
                            {move || error.get()}
                        </p>
                    </Show>
                    <Show when=move || !success.get().is_empty()>
                        <p class="profile-card__message profile-card__message--success">
                            {move || success.get()}
                        </p>
                    </Show>

                    <form on:submit=on_submit>
                        <label class="profile-card__field">
                            "Contraseña Actual"
                            <input
                                class="profile-card__input"
                                type="password"
                                prop:value=move || old_password.get()
                                on:input=move |ev| old_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-card__field">
                            "Nueva Contraseña"
                            <input
                                class="profile-card__input"
                                type="password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-card__field">
                            "Confirmar Nueva Contraseña"
                            <input
                                class="profile-card__input"
                                type="password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Guardando..." } else { "Guardar Cambios" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
