//! Company view of the event listing, behind the empresa role gate.

use leptos::prelude::*;

use crate::components::eventos_list::EventosList;
use crate::components::protected::Protected;
use crate::util::guard::EMPRESA_ONLY;

#[component]
pub fn MisEventosPage() -> impl IntoView {
    view! {
        <Protected allowed=EMPRESA_ONLY>
            <EventosList/>
        </Protected>
    }
}
