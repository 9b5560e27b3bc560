//! End-user page: own event registrations (list, cancel).

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::protected::Protected;
use crate::net::types::Inscripcion;
use crate::state::session::SessionContext;
use crate::util::fecha::fecha_legible;
use crate::util::guard::USUARIO_ONLY;

fn cargar_inscripciones(
    session: SessionContext,
    inscripciones: RwSignal<Vec<Inscripcion>>,
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
            match crate::net::api::listar_registros_usuario(&token).await {
                Ok(lista) => {
                    inscripciones.set(lista);
                    error.set(None);
                }
                Err(_) => {
                    inscripciones.set(Vec::new());
                    error.set(Some("Error cargando inscripciones".to_owned()));
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, inscripciones, loading, error);
    }
}

fn cancelar_inscripcion(
    session: SessionContext,
    id: i64,
    inscripciones: RwSignal<Vec<Inscripcion>>,
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
                Ok(()) => cargar_inscripciones(session, inscripciones, loading, error),
                Err(_) => error.set(Some("Error cancelando inscripción".to_owned())),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, id, inscripciones, loading, error);
    }
}

#[component]
pub fn InscripcionesPage() -> impl IntoView {
    view! {
        <Protected allowed=USUARIO_ONLY>
            <InscripcionesView/>
        </Protected>
    }
}

#[component]
fn InscripcionesView() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let inscripciones = RwSignal::new(Vec::<Inscripcion>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let delete_id = RwSignal::new(None::<i64>);

    cargar_inscripciones(session, inscripciones, loading, error);

    let on_confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_id.get_untracked() {
            cancelar_inscripcion(session, id, inscripciones, loading, error);
        }
        delete_id.set(None);
    });
    let on_cancel_delete = Callback::new(move |()| delete_id.set(None));

    view! {
        <div class="crud-page">
            <h2 class="crud-page__title">"Mis Inscripciones"</h2>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-message">"Cargando inscripciones..."</p> }
            >
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !inscripciones.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="page-message">"No estás inscrito a ningún evento."</p>
                        }
                    }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Evento"</th>
                                <th>"Fecha y hora del evento"</th>
                                <th>"Lugar"</th>
                                <th>"Duración"</th>
                                <th>"Organiza"</th>
                                <th>"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                inscripciones
                                    .get()
                                    .into_iter()
                                    .map(|registro| {
                                        let registro_id = registro.id_registro;
                                        view! {
                                            <tr>
                                                <td>{registro.evento.clone()}</td>
                                                <td>{fecha_legible(&registro.fecha)}</td>
                                                <td>{registro.lugar.clone()}</td>
                                                <td>{format!("{} Horas", registro.duracion)}</td>
                                                <td>{registro.empresa.clone()}</td>
                                                <td class="table__actions">
                                                    <button
                                                        class="btn btn--link btn--danger-link"
                                                        title="Cancelar inscripción"
                                                        on:click=move |_| delete_id.set(Some(registro_id))
                                                    >
                                                        "Cancelar"
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
                    message="¿Seguro que quieres cancelar esta inscripción?".to_owned()
                    confirm_label="Cancelar inscripción".to_owned()
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
