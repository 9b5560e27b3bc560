//! End-user page: profile self-update.
//!
//! A successful save re-writes the session through the login entry point so
//! the navbar greeting and any later profile visit see the fresh record.

#[cfg(test)]
#[path = "perfil_test.rs"]
mod perfil_test;

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::net::types::{User, UsuarioPayload};
use crate::state::session::SessionContext;
use crate::util::guard::USUARIO_ONLY;

#[derive(Clone, Debug, Default, PartialEq)]
struct PerfilForm {
    nombre: String,
    correo: String,
    telefono: String,
    fecha_nacimiento: String,
    ciudad: String,
}

fn form_from_user(user: &User) -> PerfilForm {
    PerfilForm {
        nombre: user.nombre.clone(),
        correo: user.correo.clone(),
        telefono: user.telefono.clone().unwrap_or_default(),
        fecha_nacimiento: user.fecha_nacimiento.clone().unwrap_or_default(),
        ciudad: user.ciudad.clone().unwrap_or_default(),
    }
}

/// Profile updates never touch the password or role.
fn payload_from_form(form: &PerfilForm) -> UsuarioPayload {
    UsuarioPayload {
        nombre: form.nombre.clone(),
        correo: form.correo.clone(),
        contrasena: None,
        telefono: form.telefono.clone(),
        fecha_nacimiento: form.fecha_nacimiento.clone(),
        ciudad: form.ciudad.clone(),
        role_id: None,
    }
}

/// Merge the saved form back into the session user, keeping id and role.
fn apply_perfil(user: &User, form: &PerfilForm) -> User {
    User {
        id: user.id,
        nombre: form.nombre.clone(),
        correo: form.correo.clone(),
        role: user.role,
        telefono: (!form.telefono.is_empty()).then(|| form.telefono.clone()),
        fecha_nacimiento: (!form.fecha_nacimiento.is_empty())
            .then(|| form.fecha_nacimiento.clone()),
        ciudad: (!form.ciudad.is_empty()).then(|| form.ciudad.clone()),
    }
}

fn guardar_perfil(
    session: SessionContext,
    form: RwSignal<PerfilForm>,
    error: RwSignal<Option<String>>,
    exito: RwSignal<Option<String>>,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let Some(token) = session.token() else {
                return;
            };
            let Some(user) = session.user() else {
                return;
            };
            let current = form.get_untracked();
            match crate::net::api::actualizar_usuario(&token, user.id, &payload_from_form(&current))
                .await
            {
                Ok(()) => {
                    session.login(apply_perfil(&user, &current), token);
                    exito.set(Some("Perfil actualizado correctamente.".to_owned()));
                }
                Err(_) => error.set(Some("Error al actualizar perfil.".to_owned())),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, form, error, exito);
    }
}

#[component]
pub fn PerfilPage() -> impl IntoView {
    view! {
        <Protected allowed=USUARIO_ONLY>
            <PerfilView/>
        </Protected>
    }
}

#[component]
fn PerfilView() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let form = RwSignal::new(
        session.user().map(|u| form_from_user(&u)).unwrap_or_default(),
    );
    let error = RwSignal::new(None::<String>);
    let exito = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        exito.set(None);
        guardar_perfil(session, form, error, exito);
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">"Mi Perfil"</h2>

            <form class="form" on:submit=on_submit>
                <input
                    class="form__input"
                    placeholder="Nombre"
                    prop:value=move || form.get().nombre
                    on:input=move |ev| form.update(|f| f.nombre = event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="email"
                    placeholder="Correo"
                    prop:value=move || form.get().correo
                    on:input=move |ev| form.update(|f| f.correo = event_target_value(&ev))
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
                    placeholder="Ciudad"
                    prop:value=move || form.get().ciudad
                    on:input=move |ev| form.update(|f| f.ciudad = event_target_value(&ev))
                />

                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || exito.get().is_some()>
                    <p class="form__success">{move || exito.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit">
                    "Actualizar Perfil"
                </button>
            </form>
        </div>
    }
}
