//! Application chrome: navbar, content area, and footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is the only place that renders differently for every role and
//! auth state: links for visitors, greeting plus dashboard/home toggle plus
//! logout for signed-in users.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::pages::dashboard::dashboard_landing;
use crate::state::session::SessionContext;
use crate::util::guard::{HOME_ROUTE, LOGIN_ROUTE};

fn greeting(nombre: &str, role: Role) -> String {
    format!("Hola, {nombre} ({})", role.as_str())
}

fn toggle_label(on_dashboard: bool) -> &'static str {
    if on_dashboard { "Ir a Home" } else { "Ir al Dashboard" }
}

/// Where the navbar toggle goes: back home from the dashboard, or to the
/// role's landing route from anywhere else.
fn toggle_target(role: Role, on_dashboard: bool) -> &'static str {
    if on_dashboard { HOME_ROUTE } else { dashboard_landing(role) }
}

fn is_dashboard_path(pathname: &str) -> bool {
    pathname.starts_with("/dashboard")
}

/// Page shell wrapping every route.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_dashboard = move || is_dashboard_path(&pathname.get());

    let on_toggle = {
        let navigate = navigate.clone();
        move |_| {
            let Some(user) = session.user() else {
                return;
            };
            let target = toggle_target(user.role, is_dashboard_path(&pathname.get_untracked()));
            navigate(target, NavigateOptions::default());
        }
    };

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="layout">
            <header class="navbar">
                <a class="navbar__brand" href="/">
                    "Eventos Colombia"
                </a>
                <nav class="navbar__nav">
                    <Show
                        when=move || session.get().authenticated()
                        fallback=|| {
                            view! {
                                <a class="navbar__link" href="/login">
                                    "Login"
                                </a>
                                <a class="navbar__link" href="/register">
                                    "Registrarse"
                                </a>
                            }
                        }
                    >
                        <span class="navbar__greeting">
                            {move || {
                                session
                                    .get()
                                    .user()
                                    .map(|u| greeting(&u.nombre, u.role))
                                    .unwrap_or_default()
                            }}
                        </span>
                        <button class="btn btn--accent" on:click=on_toggle.clone()>
                            {move || toggle_label(on_dashboard())}
                        </button>
                        <button class="btn btn--danger" on:click=on_logout.clone()>
                            "Cerrar sesión"
                        </button>
                    </Show>
                </nav>
            </header>

            <main class="layout__main">{children()}</main>

            <footer class="layout__footer">"© 2025 Eventos Colombia"</footer>
        </div>
    }
}
