//! Admin page: user management (list, create, update, delete).
//!
//! Creation goes through the auth registration endpoint with an explicit
//! `role_id`; updates go through the users resource keyed by the selected
//! row's id.

#[cfg(test)]
#[path = "usuarios_test.rs"]
mod usuarios_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::protected::Protected;
use crate::net::types::{Role, Usuario, UsuarioPayload, role_from_id};
use crate::state::session::SessionContext;
use crate::util::fecha::fecha_corta;
use crate::util::guard::ADMIN_ONLY;

#[derive(Clone, Debug, PartialEq)]
struct UsuarioForm {
    nombre: String,
    correo: String,
    contrasena: String,
    telefono: String,
    fecha_nacimiento: String,
    ciudad: String,
    role_id: i64,
}

impl Default for UsuarioForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            correo: String::new(),
            contrasena: String::new(),
            telefono: String::new(),
            fecha_nacimiento: String::new(),
            ciudad: String::new(),
            role_id: Role::Usuario.role_id(),
        }
    }
}

/// An empty password stays off the wire so updates keep the stored one.
fn payload_from_form(form: &UsuarioForm) -> UsuarioPayload {
    UsuarioPayload {
        nombre: form.nombre.clone(),
        correo: form.correo.clone(),
        contrasena: (!form.contrasena.is_empty()).then(|| form.contrasena.clone()),
        telefono: form.telefono.clone(),
        fecha_nacimiento: form.fecha_nacimiento.clone(),
        ciudad: form.ciudad.clone(),
        role_id: Some(form.role_id),
    }
}

fn form_from_usuario(usuario: &Usuario) -> UsuarioForm {
    UsuarioForm {
        nombre: usuario.nombre.clone(),
        correo: usuario.correo.clone(),
        contrasena: String::new(),
        telefono: usuario.telefono.clone().unwrap_or_default(),
        fecha_nacimiento: usuario
            .fecha_nacimiento
            .as_deref()
            .map(fecha_corta)
            .unwrap_or_default(),
        ciudad: usuario.ciudad.clone().unwrap_or_default(),
        role_id: usuario.rol,
    }
}

fn parse_role_id(value: &str) -> i64 {
    value
        .parse()
        .ok()
        .and_then(role_from_id)
        .unwrap_or(Role::Usuario)
        .role_id()
}

fn rol_label(rol: i64) -> &'static str {
    role_from_id(rol).map_or("Usuario", Role::label)
}

fn cargar_usuarios(
    session: SessionContext,
    usuarios: RwSignal<Vec<Usuario>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let Some(token) = session.token() else {
                return;
            };
            loading.set(true);
            match crate::net::api::listar_usuarios(&token).await {
                Ok(lista) => {
                    usuarios.set(lista);
                    error.set(None);
                }
                Err(_) => error.set(Some("Error cargando usuarios".to_owned())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, usuarios, loading, error);
    }
}

fn guardar_usuario(
    session: SessionContext,
    editing_id: RwSignal<Option<i64>>,
    form: RwSignal<UsuarioForm>,
    usuarios: RwSignal<Vec<Usuario>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let Some(token) = session.token() else {
                return;
            };
            let payload = payload_from_form(&form.get_untracked());
            let result = match editing_id.get_untracked() {
                Some(id) => crate::net::api::actualizar_usuario(&token, id, &payload).await,
                None => crate::net::api::registrar_usuario(Some(&token), &payload).await,
            };
            match result {
                Ok(()) => {
                    form.set(UsuarioForm::default());
                    editing_id.set(None);
                    error.set(None);
                    cargar_usuarios(session, usuarios, loading, error);
                }
                Err(_) => {
                    let msg = if editing_id.get_untracked().is_some() {
                        "Error actualizando usuario"
                    } else {
                        "Error creando usuario"
                    };
                    error.set(Some(msg.to_owned()));
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, editing_id, form, usuarios, loading, error);
    }
}

fn eliminar_usuario(
    session: SessionContext,
    id: i64,
    usuarios: RwSignal<Vec<Usuario>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let Some(token) = session.token() else {
                return;
            };
            match crate::net::api::eliminar_usuario(&token, id).await {
                Ok(()) => cargar_usuarios(session, usuarios, loading, error),
                Err(_) => error.set(Some("Error eliminando usuario".to_owned())),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, id, usuarios, loading, error);
    }
}

#[component]
pub fn UsuariosPage() -> impl IntoView {
    view! {
        <Protected allowed=ADMIN_ONLY>
            <UsuariosView/>
        </Protected>
    }
}

#[component]
fn UsuariosView() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let usuarios = RwSignal::new(Vec::<Usuario>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let form = RwSignal::new(UsuarioForm::default());
    let editing_id = RwSignal::new(None::<i64>);
    let delete_id = RwSignal::new(None::<i64>);

    cargar_usuarios(session, usuarios, loading, error);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        guardar_usuario(session, editing_id, form, usuarios, loading, error);
    };

    let on_reset = move |_| {
        form.set(UsuarioForm::default());
        editing_id.set(None);
        error.set(None);
    };

    let on_confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_id.get_untracked() {
            eliminar_usuario(session, id, usuarios, loading, error);
        }
        delete_id.set(None);
    });
    let on_cancel_delete = Callback::new(move |()| delete_id.set(None));

    view! {
        <div class="crud-page">
            <h2 class="crud-page__title">"Gestión de Usuarios"</h2>

            <form class="form crud-page__form" on:submit=on_submit>
                <h3 class="form__heading">
                    {move || {
                        if editing_id.get().is_some() { "Editar Usuario" } else { "Crear Nuevo Usuario" }
                    }}
                </h3>

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
                    type="password"
                    placeholder="Contraseña"
                    prop:value=move || form.get().contrasena
                    on:input=move |ev| form.update(|f| f.contrasena = event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="tel"
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
                <select
                    class="form__input"
                    prop:value=move || form.get().role_id.to_string()
                    on:change=move |ev| {
                        form.update(|f| f.role_id = parse_role_id(&event_target_value(&ev)));
                    }
                >
                    <option value="1">"Admin"</option>
                    <option value="2">"Empresa"</option>
                    <option value="3">"Usuario"</option>
                </select>

                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="form__actions">
                    <button class="btn btn--primary" type="submit">
                        {move || if editing_id.get().is_some() { "Actualizar" } else { "Crear" }}
                    </button>
                    <Show when=move || editing_id.get().is_some()>
                        <button class="btn" type="button" on:click=on_reset>
                            "Cancelar"
                        </button>
                    </Show>
                </div>
            </form>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-message">"Cargando usuarios..."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Correo"</th>
                            <th>"Teléfono"</th>
                            <th>"Fecha Nac."</th>
                            <th>"Ciudad"</th>
                            <th>"Rol"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            usuarios
                                .get()
                                .into_iter()
                                .map(|usuario| {
                                    let edit_source = usuario.clone();
                                    let usuario_id = usuario.id;
                                    view! {
                                        <tr>
                                            <td>{usuario.nombre.clone()}</td>
                                            <td>{usuario.correo.clone()}</td>
                                            <td>
                                                {usuario.telefono.clone().unwrap_or_else(|| "-".to_owned())}
                                            </td>
                                            <td>
                                                {usuario
                                                    .fecha_nacimiento
                                                    .as_deref()
                                                    .map(fecha_corta)
                                                    .unwrap_or_else(|| "-".to_owned())}
                                            </td>
                                            <td>{usuario.ciudad.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                            <td>{rol_label(usuario.rol)}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--link"
                                                    title="Editar"
                                                    on:click=move |_| {
                                                        form.set(form_from_usuario(&edit_source));
                                                        editing_id.set(Some(usuario_id));
                                                    }
                                                >
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="btn btn--link btn--danger-link"
                                                    title="Eliminar"
                                                    on:click=move |_| delete_id.set(Some(usuario_id))
                                                >
                                                    "Eliminar"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || usuarios.get().is_empty()>
                    <p class="page-message">"No hay usuarios."</p>
                </Show>
            </Show>

            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    message="¿Seguro que quieres eliminar este usuario?".to_owned()
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
