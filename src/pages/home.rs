//! Public landing page with the event listing.

use leptos::prelude::*;

use crate::components::eventos_list::EventosList;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h1 class="home__title">"Bienvenido a Eventos Colombia"</h1>
            <EventosList/>
        </div>
    }
}
