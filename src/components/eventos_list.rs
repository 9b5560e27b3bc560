//! Shared card listing of available events.
//!
//! DESIGN
//! ======
//! The same listing backs the public home page and the company's
//! "Mis Eventos" view, so the fetch lives here rather than in a page. The
//! bearer header is attached only when a session exists.

use leptos::prelude::*;

use crate::net::types::Evento;
use crate::state::session::SessionContext;
use crate::util::fecha::fecha_legible;

const IMAGEN_EVENTO: &str =
    "https://images.unsplash.com/photo-1526045612212-70caf35c14df?auto=format&fit=crop&w=600&q=80";

fn cargar_eventos(
    session: SessionContext,
    eventos: RwSignal<Vec<Evento>>,
    loading: RwSignal<bool>,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let token = session.token();
            if let Ok(lista) = crate::net::api::listar_eventos(token.as_deref()).await {
                eventos.set(lista);
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, eventos, loading);
    }
}

/// Grid of event cards, fetched on mount.
#[component]
pub fn EventosList() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let eventos = RwSignal::new(Vec::<Evento>::new());
    let loading = RwSignal::new(true);

    cargar_eventos(session, eventos, loading);

    view! {
        <div class="eventos-list">
            <h2 class="eventos-list__title">"Eventos Disponibles"</h2>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-message">"Cargando eventos..."</p> }
            >
                <Show
                    when=move || !eventos.get().is_empty()
                    fallback=|| {
                        view! { <p class="page-message">"No hay eventos disponibles."</p> }
                    }
                >
                    <div class="eventos-list__grid">
                        {move || {
                            eventos
                                .get()
                                .into_iter()
                                .map(|evento| view! { <EventoCard evento=evento/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn EventoCard(evento: Evento) -> impl IntoView {
    view! {
        <div class="evento-card">
            <img class="evento-card__image" src=IMAGEN_EVENTO alt=evento.titulo.clone()/>
            <h3 class="evento-card__title">{evento.titulo}</h3>
            <p class="evento-card__description">{evento.descripcion}</p>
            <p class="evento-card__meta">{format!("Tipo: {}", evento.tipo_evento)}</p>
            <p class="evento-card__meta">{format!("Fecha: {}", fecha_legible(&evento.fecha_inicio))}</p>
        </div>
    }
}
