//! Login page with credential form and per-role landing redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;

fn validate_credentials(correo: &str, contrasena: &str) -> Result<(String, String), &'static str> {
    let correo = correo.trim();
    if correo.is_empty() || contrasena.is_empty() {
        return Err("Ingresa correo y contraseña.");
    }
    Ok((correo.to_owned(), contrasena.to_owned()))
}

fn enviar_login<F>(
    session: SessionContext,
    navigate: F,
    correo: String,
    contrasena: String,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&correo, &contrasena).await {
                Ok(resp) => {
                    let landing = crate::pages::dashboard::dashboard_landing(resp.user.role);
                    session.login(resp.user, resp.token);
                    navigate(landing, NavigateOptions::default());
                }
                Err(_) => {
                    error.set(Some("Credenciales inválidas.".to_owned()));
                    busy.set(false);
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, navigate, correo, contrasena, error, busy);
    }
}

/// Login page — a successful login seeds the session and lands the user on
/// their role's dashboard section.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let correo = RwSignal::new(String::new());
    let contrasena = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let validated =
            validate_credentials(&correo.get_untracked(), &contrasena.get_untracked());
        match validated {
            Ok((correo_value, contrasena_value)) => {
                busy.set(true);
                enviar_login(session, navigate.clone(), correo_value, contrasena_value, error, busy);
            }
            Err(msg) => error.set(Some(msg.to_owned())),
        }
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">"Iniciar Sesión"</h2>

            <form class="form" on:submit=on_submit>
                <input
                    class="form__input"
                    type="email"
                    placeholder="Correo"
                    prop:value=move || correo.get()
                    on:input=move |ev| correo.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="password"
                    placeholder="Contraseña"
                    prop:value=move || contrasena.get()
                    on:input=move |ev| contrasena.set(event_target_value(&ev))
                />

                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Entrar"
                </button>
            </form>
        </div>
    }
}
