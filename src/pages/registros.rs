//! Company page: registrations to the company's events (list, delete).

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::protected::Protected;
use crate::net::types::RegistroEvento;
use crate::state::session::SessionContext;
use crate::util::fecha::fecha_legible;
use crate::util::guard::EMPRESA_ONLY;

fn cargar_registros(
    session: SessionContext,
    registros: RwSignal<Vec<RegistroEvento>>,
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
            match crate::net::api::listar_registros(&token).await {
                Ok(lista) => {
                    registros.set(lista);
                    error.set(None);
                }
                Err(_) => error.set(Some("Error cargando registros".to_owned())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, registros, loading, error);
    }
}

fn eliminar_registro(
    session: SessionContext,
    id: i64,
    registros: RwSignal<Vec<RegistroEvento>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let Some(token) = session.token() else {
                return;
            };
            match crate::net::api::eliminar_registro(&token, id).await {
                Ok(()) => cargar_registros(session, registros, loading, error),
                Err(_) => error.set(Some("Error eliminando registro".to_owned())),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, id, registros, loading, error);
    }
}

#[component]
pub fn RegistrosPage() -> impl IntoView {
    view! {
        <Protected allowed=EMPRESA_ONLY>
            <RegistrosView/>
        </Protected>
    }
}

#[component]
fn RegistrosView() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let registros = RwSignal::new(Vec::<RegistroEvento>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let delete_id = RwSignal::new(None::<i64>);

    cargar_registros(session, registros, loading, error);

    let on_confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_id.get_untracked() {
            eliminar_registro(session, id, registros, loading, error);
        }
        delete_id.set(None);
    });
    let on_cancel_delete = Callback::new(move |()| delete_id.set(None));

    view! {
        <div class="crud-page">
            <h2 class="crud-page__title">"Registros a mis Eventos"</h2>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-message">"Cargando registros..."</p> }
            >
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !registros.get().is_empty()
                    fallback=|| view! { <p class="page-message">"No hay registros aún."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Usuario"</th>
                                <th>"Evento"</th>
                                <th>"Empresa"</th>
                                <th>"Fecha de Registro"</th>
                                <th>"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                registros
                                    .get()
                                    .into_iter()
                                    .map(|registro| {
                                        let registro_id = registro.id_registro_evento;
                                        view! {
                                            <tr>
                                                <td>{registro.usuario.clone()}</td>
                                                <td>{registro.evento.clone()}</td>
                                                <td>{registro.empresa.clone()}</td>
                                                <td>{fecha_legible(&registro.fecha_registro)}</td>
                                                <td class="table__actions">
                                                    <button
                                                        class="btn btn--link btn--danger-link"
                                                        title="Eliminar registro"
                                                        on:click=move |_| delete_id.set(Some(registro_id))
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
                </Show>
            </Show>

            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    message="¿Seguro que quieres eliminar este registro?".to_owned()
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
