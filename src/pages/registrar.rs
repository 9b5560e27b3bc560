//! End-user page: register for an active event.

#[cfg(test)]
#[path = "registrar_test.rs"]
mod registrar_test;

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::net::api::ApiError;
use crate::net::types::{EstadoEvento, Evento};
use crate::state::session::SessionContext;
use crate::util::fecha::fecha_corta;
use crate::util::guard::USUARIO_ONLY;

/// Only active events can be registered for.
fn eventos_disponibles(eventos: Vec<Evento>) -> Vec<Evento> {
    eventos.into_iter().filter(|e| e.estado == EstadoEvento::Activo).collect()
}

fn parse_evento_id(value: &str) -> Option<i64> {
    value.parse().ok()
}

fn opcion_evento(evento: &Evento) -> String {
    format!("{} - {}", evento.titulo, fecha_corta(&evento.fecha_inicio))
}

/// A duplicate registration gets its own message; everything else collapses
/// into the generic one.
fn registro_error_message(err: &ApiError) -> String {
    match err.backend_message() {
        Some(msg) if msg.contains("Ya estás registrado") => {
            "Ya estás inscrito en este evento.".to_owned()
        }
        _ => "Error al registrar inscripción.".to_owned(),
    }
}

fn cargar_eventos(
    session: SessionContext,
    eventos: RwSignal<Vec<Evento>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let token = session.token();
            loading.set(true);
            match crate::net::api::listar_eventos(token.as_deref()).await {
                Ok(lista) => {
                    eventos.set(eventos_disponibles(lista));
                    error.set(None);
                }
                Err(_) => {
                    eventos.set(Vec::new());
                    error.set(Some("Error cargando eventos".to_owned()));
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, eventos, loading, error);
    }
}

fn enviar_inscripcion(
    session: SessionContext,
    evento_id: i64,
    seleccion: RwSignal<String>,
    submitting: RwSignal<bool>,
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
            let payload = crate::net::types::InscripcionPayload { user_id: user.id, evento_id };
            match crate::net::api::registrar_evento(&token, &payload).await {
                Ok(()) => {
                    exito.set(Some("Inscripción realizada con éxito.".to_owned()));
                    seleccion.set(String::new());
                }
                Err(err) => error.set(Some(registro_error_message(&err))),
            }
            submitting.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, evento_id, seleccion, submitting, error, exito);
    }
}

#[component]
pub fn RegistrarEventoPage() -> impl IntoView {
    view! {
        <Protected allowed=USUARIO_ONLY>
            <RegistrarEventoView/>
        </Protected>
    }
}

#[component]
fn RegistrarEventoView() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let eventos = RwSignal::new(Vec::<Evento>::new());
    let loading = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let exito = RwSignal::new(None::<String>);
    let seleccion = RwSignal::new(String::new());

    cargar_eventos(session, eventos, loading, error);

    let on_reload = move |_| cargar_eventos(session, eventos, loading, error);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        error.set(None);
        exito.set(None);
        let Some(evento_id) = parse_evento_id(&seleccion.get_untracked()) else {
            error.set(Some("Por favor selecciona un evento.".to_owned()));
            return;
        };
        submitting.set(true);
        enviar_inscripcion(session, evento_id, seleccion, submitting, error, exito);
    };

    view! {
        <div class="auth-card">
            <div class="auth-card__header">
                <h2 class="auth-card__title">"Registrar a Evento"</h2>
                <button class="btn" title="Recargar eventos" on:click=on_reload>
                    "Recargar"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-message">"Cargando eventos..."</p> }
            >
                <form class="form" on:submit=on_submit>
                    <select
                        class="form__input"
                        prop:value=move || seleccion.get()
                        on:change=move |ev| seleccion.set(event_target_value(&ev))
                    >
                        <option value="">"-- Selecciona un evento --"</option>
                        {move || {
                            eventos
                                .get()
                                .iter()
                                .map(|evento| {
                                    view! {
                                        <option value=evento.id.to_string()>
                                            {opcion_evento(evento)}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>

                    <Show when=move || exito.get().is_some()>
                        <p class="form__success">{move || exito.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Registrando..." } else { "Registrar" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
