//! Role-gated wrapper for protected route subtrees.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::SessionContext;
use crate::util::guard::{GuardOutcome, guard_outcome, install_route_guard};

/// Renders its children only when the session's role is in `allowed`;
/// otherwise navigates per the route guard and renders a placeholder.
///
/// Mount effects of the children (list fetches, in particular) only run when
/// the guard decides to render, so a denied visit issues no network calls.
#[component]
pub fn Protected(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    install_route_guard(session, allowed, navigate);

    view! {
        <Show
            when=move || guard_outcome(&session.get(), allowed) == GuardOutcome::Render
            fallback=|| view! { <p class="page-message">"Redirigiendo..."</p> }
        >
            {children()}
        </Show>
    }
}
