//! Admin page: company management (list, create, update, delete).
//!
//! Company accounts are created through the auth registration endpoint; the
//! companies resource only accepts address, city, and company type on update,
//! so the edit path sends that subset.

#[cfg(test)]
#[path = "empresas_test.rs"]
mod empresas_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::protected::Protected;
use crate::net::types::{Empresa, EmpresaPayload, EmpresaUpdatePayload, Role};
use crate::state::session::SessionContext;
use crate::util::guard::ADMIN_ONLY;

#[derive(Clone, Debug, PartialEq)]
struct EmpresaForm {
    nombre: String,
    correo: String,
    contrasena: String,
    telefono: String,
    direccion: String,
    ciudad: String,
    tipo_empresa: String,
    role_id: i64,
}

impl Default for EmpresaForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            correo: String::new(),
            contrasena: String::new(),
            telefono: String::new(),
            direccion: String::new(),
            ciudad: String::new(),
            tipo_empresa: String::new(),
            role_id: Role::Empresa.role_id(),
        }
    }
}

fn create_payload(form: &EmpresaForm) -> EmpresaPayload {
    EmpresaPayload {
        nombre: form.nombre.clone(),
        correo: form.correo.clone(),
        contrasena: form.contrasena.clone(),
        telefono: form.telefono.clone(),
        direccion: form.direccion.clone(),
        ciudad: form.ciudad.clone(),
        tipo_empresa: form.tipo_empresa.clone(),
        role_id: form.role_id,
    }
}

fn update_payload(form: &EmpresaForm) -> EmpresaUpdatePayload {
    EmpresaUpdatePayload {
        direccion: form.direccion.clone(),
        ciudad: form.ciudad.clone(),
        tipo_empresa: form.tipo_empresa.clone(),
    }
}

fn form_from_empresa(empresa: &Empresa) -> EmpresaForm {
    EmpresaForm {
        nombre: empresa.nombre.clone(),
        correo: empresa.correo.clone(),
        contrasena: String::new(),
        telefono: empresa.telefono.clone().unwrap_or_default(),
        direccion: empresa.direccion.clone().unwrap_or_default(),
        ciudad: empresa.ciudad.clone().unwrap_or_default(),
        tipo_empresa: empresa.tipo_empresa.clone().unwrap_or_default(),
        role_id: Role::Empresa.role_id(),
    }
}

fn parse_role_id(value: &str) -> i64 {
    match value.parse() {
        Ok(2) => Role::Empresa.role_id(),
        Ok(3) => Role::Usuario.role_id(),
        _ => Role::Empresa.role_id(),
    }
}

fn cargar_empresas(
    session: SessionContext,
    empresas: RwSignal<Vec<Empresa>>,
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
            match crate::net::api::listar_empresas(&token).await {
                Ok(lista) => {
                    empresas.set(lista);
                    error.set(None);
                }
                Err(_) => error.set(Some("Error cargando empresas".to_owned())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, empresas, loading, error);
    }
}

fn guardar_empresa(
    session: SessionContext,
    editing_id: RwSignal<Option<i64>>,
    form: RwSignal<EmpresaForm>,
    empresas: RwSignal<Vec<Empresa>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let Some(token) = session.token() else {
                return;
            };
            let current = form.get_untracked();
            let result = match editing_id.get_untracked() {
                Some(id) => {
                    crate::net::api::actualizar_empresa(&token, id, &update_payload(&current))
                        .await
                        .map_err(|e| e.display_or("Error actualizando empresa"))
                }
                None => crate::net::api::registrar_empresa(&token, &create_payload(&current))
                    .await
                    .map_err(|_| "Error creando empresa".to_owned()),
            };
            match result {
                Ok(()) => {
                    form.set(EmpresaForm::default());
                    editing_id.set(None);
                    error.set(None);
                    cargar_empresas(session, empresas, loading, error);
                }
                Err(msg) => error.set(Some(msg)),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, editing_id, form, empresas, loading, error);
    }
}

fn eliminar_empresa(
    session: SessionContext,
    id: i64,
    empresas: RwSignal<Vec<Empresa>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let Some(token) = session.token() else {
                return;
            };
            match crate::net::api::eliminar_empresa(&token, id).await {
                Ok(()) => cargar_empresas(session, empresas, loading, error),
                Err(_) => error.set(Some("Error eliminando empresa".to_owned())),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, id, empresas, loading, error);
    }
}

#[component]
pub fn EmpresasPage() -> impl IntoView {
    view! {
        <Protected allowed=ADMIN_ONLY>
            <EmpresasView/>
        </Protected>
    }
}

#[component]
fn EmpresasView() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let empresas = RwSignal::new(Vec::<Empresa>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let form = RwSignal::new(EmpresaForm::default());
    let editing_id = RwSignal::new(None::<i64>);
    let delete_id = RwSignal::new(None::<i64>);

    cargar_empresas(session, empresas, loading, error);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        guardar_empresa(session, editing_id, form, empresas, loading, error);
    };

    let on_reset = move |_| {
        form.set(EmpresaForm::default());
        editing_id.set(None);
        error.set(None);
    };

    let on_confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_id.get_untracked() {
            eliminar_empresa(session, id, empresas, loading, error);
        }
        delete_id.set(None);
    });
    let on_cancel_delete = Callback::new(move |()| delete_id.set(None));

    let es_empresa = move || form.get().role_id == Role::Empresa.role_id();

    view! {
        <div class="crud-page">
            <h2 class="crud-page__title">"Gestión de Empresas"</h2>

            <form class="form crud-page__form" on:submit=on_submit>
                <h3 class="form__heading">
                    {move || {
                        if editing_id.get().is_some() { "Editar Empresa" } else { "Crear Nueva Empresa" }
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
                <Show when=move || editing_id.get().is_none()>
                    <input
                        class="form__input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || form.get().contrasena
                        on:input=move |ev| form.update(|f| f.contrasena = event_target_value(&ev))
                    />
                </Show>
                <input
                    class="form__input"
                    placeholder="Teléfono"
                    prop:value=move || form.get().telefono
                    on:input=move |ev| form.update(|f| f.telefono = event_target_value(&ev))
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
                    <option value="2">"Empresa"</option>
                    <option value="3">"Usuario"</option>
                </select>
                <Show when=es_empresa>
                    <input
                        class="form__input"
                        placeholder="Dirección"
                        prop:value=move || form.get().direccion
                        on:input=move |ev| form.update(|f| f.direccion = event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        placeholder="Tipo de empresa"
                        prop:value=move || form.get().tipo_empresa
                        on:input=move |ev| form.update(|f| f.tipo_empresa = event_target_value(&ev))
                    />
                </Show>

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
                fallback=|| view! { <p class="page-message">"Cargando empresas..."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Correo"</th>
                            <th>"Teléfono"</th>
                            <th>"Dirección"</th>
                            <th>"Ciudad"</th>
                            <th>"Tipo Empresa"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            empresas
                                .get()
                                .into_iter()
                                .map(|empresa| {
                                    let edit_source = empresa.clone();
                                    let empresa_id = empresa.id;
                                    view! {
                                        <tr>
                                            <td>{empresa.nombre.clone()}</td>
                                            <td>{empresa.correo.clone()}</td>
                                            <td>
                                                {empresa.telefono.clone().unwrap_or_else(|| "-".to_owned())}
                                            </td>
                                            <td>
                                                {empresa.direccion.clone().unwrap_or_else(|| "-".to_owned())}
                                            </td>
                                            <td>{empresa.ciudad.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                            <td>
                                                {empresa
                                                    .tipo_empresa
                                                    .clone()
                                                    .unwrap_or_else(|| "-".to_owned())}
                                            </td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--link"
                                                    title="Editar"
                                                    on:click=move |_| {
                                                        form.set(form_from_empresa(&edit_source));
                                                        editing_id.set(Some(empresa_id));
                                                    }
                                                >
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="btn btn--link btn--danger-link"
                                                    title="Eliminar"
                                                    on:click=move |_| delete_id.set(Some(empresa_id))
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
                <Show when=move || empresas.get().is_empty()>
                    <p class="page-message">"No hay empresas."</p>
                </Show>
            </Show>

            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    message="¿Seguro que quieres eliminar esta empresa?".to_owned()
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
