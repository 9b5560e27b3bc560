//! Company page: event management (list, create, update, delete).

#[cfg(test)]
#[path = "eventos_test.rs"]
mod eventos_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::protected::Protected;
use crate::net::types::{EstadoEvento, Evento, EventoPayload};
use crate::state::session::SessionContext;
use crate::util::fecha::{fecha_input, fecha_legible};
use crate::util::guard::EMPRESA_ONLY;

#[derive(Clone, Debug, PartialEq)]
struct EventoForm {
    titulo: String,
    descripcion: String,
    direccion: String,
    tipo_evento: String,
    fecha_inicio: String,
    duracion_horas: String,
    capacidad_maxima: String,
    estado: EstadoEvento,
}

impl Default for EventoForm {
    fn default() -> Self {
        Self {
            titulo: String::new(),
            descripcion: String::new(),
            direccion: String::new(),
            tipo_evento: String::new(),
            fecha_inicio: String::new(),
            duracion_horas: "1".to_owned(),
            capacidad_maxima: "0".to_owned(),
            estado: EstadoEvento::Activo,
        }
    }
}

/// Duration below one hour makes no sense; blank or junk input becomes 1.
fn parse_horas(value: &str) -> i64 {
    value.trim().parse().unwrap_or(1).max(1)
}

/// Zero capacity means unlimited; blank or junk input becomes 0.
fn parse_capacidad(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0).max(0)
}

fn parse_estado(value: &str) -> EstadoEvento {
    if value == "finalizado" { EstadoEvento::Finalizado } else { EstadoEvento::Activo }
}

/// `user_id` is the organizing company, attached on create only.
fn payload_from_form(form: &EventoForm, user_id: Option<i64>) -> EventoPayload {
    EventoPayload {
        titulo: form.titulo.clone(),
        descripcion: form.descripcion.clone(),
        direccion: form.direccion.clone(),
        tipo_evento: form.tipo_evento.clone(),
        fecha_inicio: form.fecha_inicio.clone(),
        duracion_horas: parse_horas(&form.duracion_horas),
        capacidad_maxima: parse_capacidad(&form.capacidad_maxima),
        estado: form.estado,
        user_id,
    }
}

fn form_from_evento(evento: &Evento) -> EventoForm {
    EventoForm {
        titulo: evento.titulo.clone(),
        descripcion: evento.descripcion.clone(),
        direccion: evento.direccion.clone(),
        tipo_evento: evento.tipo_evento.clone(),
        fecha_inicio: fecha_input(&evento.fecha_inicio),
        duracion_horas: evento.duracion_horas.to_string(),
        capacidad_maxima: evento.capacidad_maxima.to_string(),
        estado: evento.estado,
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
            let Some(token) = session.token() else {
                return;
            };
            loading.set(true);
            match crate::net::api::listar_eventos(Some(&token)).await {
                Ok(lista) => {
                    eventos.set(lista);
                    error.set(None);
                }
                Err(_) => error.set(Some("Error cargando eventos".to_owned())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, eventos, loading, error);
    }
}

fn guardar_evento(
    session: SessionContext,
    editing_id: RwSignal<Option<i64>>,
    form: RwSignal<EventoForm>,
    eventos: RwSignal<Vec<Evento>>,
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
                    let payload = payload_from_form(&current, None);
                    crate::net::api::actualizar_evento(&token, id, &payload)
                        .await
                        .map_err(|_| "Error actualizando evento".to_owned())
                }
                None => {
                    let user_id = session.user().map(|u| u.id);
                    let payload = payload_from_form(&current, user_id);
                    crate::net::api::crear_evento(&token, &payload)
                        .await
                        .map_err(|e| e.display_or("Error creando evento"))
                }
            };
            match result {
                Ok(()) => {
                    form.set(EventoForm::default());
                    editing_id.set(None);
                    error.set(None);
                    cargar_eventos(session, eventos, loading, error);
                }
                Err(msg) => error.set(Some(msg)),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, editing_id, form, eventos, loading, error);
    }
}

fn eliminar_evento(
    session: SessionContext,
    id: i64,
    eventos: RwSignal<Vec<Evento>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let Some(token) = session.token() else {
                return;
            };
            match crate::net::api::eliminar_evento(&token, id).await {
                Ok(()) => cargar_eventos(session, eventos, loading, error),
                Err(_) => error.set(Some("Error eliminando evento".to_owned())),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, id, eventos, loading, error);
    }
}

#[component]
pub fn EventosPage() -> impl IntoView {
    view! {
        <Protected allowed=EMPRESA_ONLY>
            <EventosView/>
        </Protected>
    }
}

#[component]
fn EventosView() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let eventos = RwSignal::new(Vec::<Evento>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let form = RwSignal::new(EventoForm::default());
    let editing_id = RwSignal::new(None::<i64>);
    let delete_id = RwSignal::new(None::<i64>);

    cargar_eventos(session, eventos, loading, error);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        guardar_evento(session, editing_id, form, eventos, loading, error);
    };

    let on_reset = move |_| {
        form.set(EventoForm::default());
        editing_id.set(None);
        error.set(None);
    };

    let on_confirm_delete = Callback::new(move |()| {
        if let Some(id) = delete_id.get_untracked() {
            eliminar_evento(session, id, eventos, loading, error);
        }
        delete_id.set(None);
    });
    let on_cancel_delete = Callback::new(move |()| delete_id.set(None));

    view! {
        <div class="crud-page">
            <h2 class="crud-page__title">"Gestión de Eventos"</h2>

            <form class="form crud-page__form crud-page__form--wide" on:submit=on_submit>
                <h3 class="form__heading">
                    {move || {
                        if editing_id.get().is_some() { "Editar Evento" } else { "Crear Nuevo Evento" }
                    }}
                </h3>

                <div class="form__grid">
                    <input
                        class="form__input"
                        placeholder="Título"
                        prop:value=move || form.get().titulo
                        on:input=move |ev| form.update(|f| f.titulo = event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        placeholder="Tipo de evento"
                        prop:value=move || form.get().tipo_evento
                        on:input=move |ev| form.update(|f| f.tipo_evento = event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="datetime-local"
                        prop:value=move || form.get().fecha_inicio
                        on:input=move |ev| form.update(|f| f.fecha_inicio = event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="number"
                        min="1"
                        placeholder="Duración (horas)"
                        prop:value=move || form.get().duracion_horas
                        on:input=move |ev| {
                            form.update(|f| f.duracion_horas = event_target_value(&ev));
                        }
                    />
                    <input
                        class="form__input"
                        type="number"
                        min="0"
                        placeholder="Capacidad máxima"
                        prop:value=move || form.get().capacidad_maxima
                        on:input=move |ev| {
                            form.update(|f| f.capacidad_maxima = event_target_value(&ev));
                        }
                    />
                    <select
                        class="form__input"
                        prop:value=move || form.get().estado.as_str().to_owned()
                        on:change=move |ev| {
                            form.update(|f| f.estado = parse_estado(&event_target_value(&ev)));
                        }
                    >
                        <option value="activo">"Activo"</option>
                        <option value="finalizado">"Finalizado"</option>
                    </select>
                    <input
                        class="form__input form__input--full"
                        placeholder="Dirección"
                        prop:value=move || form.get().direccion
                        on:input=move |ev| form.update(|f| f.direccion = event_target_value(&ev))
                    />
                    <textarea
                        class="form__input form__input--full"
                        placeholder="Descripción"
                        rows="3"
                        prop:value=move || form.get().descripcion
                        on:input=move |ev| form.update(|f| f.descripcion = event_target_value(&ev))
                    ></textarea>
                </div>

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
                fallback=|| view! { <p class="page-message">"Cargando eventos..."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Título"</th>
                            <th>"Tipo"</th>
                            <th>"Fecha Inicio"</th>
                            <th>"Duración (hrs)"</th>
                            <th>"Capacidad"</th>
                            <th>"Estado"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            eventos
                                .get()
                                .into_iter()
                                .map(|evento| {
                                    let edit_source = evento.clone();
                                    let evento_id = evento.id;
                                    view! {
                                        <tr>
                                            <td>{evento.titulo.clone()}</td>
                                            <td>{evento.tipo_evento.clone()}</td>
                                            <td>{fecha_legible(&evento.fecha_inicio)}</td>
                                            <td>{evento.duracion_horas}</td>
                                            <td>{evento.capacidad_maxima}</td>
                                            <td>{evento.estado.label()}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--link"
                                                    title="Editar"
                                                    on:click=move |_| {
                                                        form.set(form_from_evento(&edit_source));
                                                        editing_id.set(Some(evento_id));
                                                    }
                                                >
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="btn btn--link btn--danger-link"
                                                    title="Eliminar"
                                                    on:click=move |_| delete_id.set(Some(evento_id))
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
                <Show when=move || eventos.get().is_empty()>
                    <p class="page-message">"No hay eventos."</p>
                </Show>
            </Show>

            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    message="¿Seguro que quieres eliminar este evento?".to_owned()
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
