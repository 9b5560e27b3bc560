//! Public end-user registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Role, UsuarioPayload};

#[derive(Clone, Debug, Default, PartialEq)]
struct RegistroForm {
    nombre: String,
    correo: String,
    contrasena: String,
    telefono: String,
    fecha_nacimiento: String,
    ciudad: String,
}

fn validate(form: &RegistroForm) -> Result<(), &'static str> {
    if form.nombre.trim().is_empty()
        || form.correo.trim().is_empty()
        || form.contrasena.is_empty()
        || form.ciudad.trim().is_empty()
    {
        return Err("Por favor complete todos los campos obligatorios.");
    }
    Ok(())
}

/// Self-registration always creates an end-user account.
fn payload_from_form(form: &RegistroForm) -> UsuarioPayload {
    UsuarioPayload {
        nombre: form.nombre.clone(),
        correo: form.correo.clone(),
        contrasena: Some(form.contrasena.clone()),
        telefono: form.telefono.clone(),
        fecha_nacimiento: form.fecha_nacimiento.clone(),
        ciudad: form.ciudad.clone(),
        role_id: Some(Role::Usuario.role_id()),
    }
}

fn enviar_registro<F>(
    payload: UsuarioPayload,
    navigate: F,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::registrar_usuario(None, &payload).await {
                Ok(()) => navigate(crate::util::guard::LOGIN_ROUTE, NavigateOptions::default()),
                Err(_) => {
                    error.set(Some("Error al registrar. Verifica tus datos.".to_owned()));
                    busy.set(false);
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (payload, navigate, error, busy);
    }
}

/// Registration page — on success the visitor is sent to the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let form = RwSignal::new(RegistroForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let current = form.get_untracked();
        match validate(&current) {
            Ok(()) => {
                busy.set(true);
                enviar_registro(payload_from_form(&current), navigate.clone(), error, busy);
            }
            Err(msg) => error.set(Some(msg.to_owned())),
        }
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">"Registro de Usuario"</h2>

            <form class="form" on:submit=on_submit>
                <input
                    class="form__input"
                    placeholder="Nombre completo *"
                    prop:value=move || form.get().nombre
                    on:input=move |ev| form.update(|f| f.nombre = event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="email"
                    placeholder="Correo electrónico *"
                    prop:value=move || form.get().correo
                    on:input=move |ev| form.update(|f| f.correo = event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="password"
                    placeholder="Contraseña *"
                    prop:value=move || form.get().contrasena
                    on:input=move |ev| form.update(|f| f.contrasena = event_target_value(&ev))
                />
                <input
                    class="form__input"
                    placeholder="Teléfono"
                    prop:value=move || form.get().telefono
                    on:input=move |ev| form.update(|f| f.telefono = event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || form.get().fecha_nacimiento
                    on:input=move |ev| form.update(|f| f.fecha_nacimiento = event_target_value(&ev))
                />
                <input
                    class="form__input"
                    placeholder="Ciudad *"
                    prop:value=move || form.get().ciudad
                    on:input=move |ev| form.update(|f| f.ciudad = event_target_value(&ev))
                />

                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Registrarse"
                </button>
            </form>

            <p class="auth-card__hint">
                "¿Ya tienes cuenta? "
                <a class="auth-card__link" href="/login">
                    "Inicia sesión aquí"
                </a>
            </p>
        </div>
    }
}
