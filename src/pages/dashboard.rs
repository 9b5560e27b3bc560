//! Dashboard shell: role-specific sidebar menu around the nested routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing subtree. Which menu entries and child
//! routes exist for a session is decided exclusively by lookup tables keyed
//! on the closed role enum.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::protected::Protected;
use crate::net::types::Role;
use crate::state::session::SessionContext;
use crate::util::guard::ANY_ROLE;

/// A sidebar menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub path: &'static str,
    pub label: &'static str,
}

const MENU_ADMIN: &[MenuEntry] = &[
    MenuEntry { path: "/dashboard/usuarios", label: "Gestionar Usuarios" },
    MenuEntry { path: "/dashboard/empresas", label: "Gestionar Empresas" },
];

const MENU_EMPRESA: &[MenuEntry] = &[
    MenuEntry { path: "/dashboard/mis-eventos", label: "Mis Eventos" },
    MenuEntry { path: "/dashboard/gestion-eventos", label: "Gestión de Eventos" },
    MenuEntry { path: "/dashboard/registro-eventos", label: "Registros a mis eventos" },
];

const MENU_USUARIO: &[MenuEntry] = &[
    MenuEntry { path: "/dashboard/mis-inscripciones", label: "Mis Inscripciones" },
    MenuEntry { path: "/dashboard/registrar-evento", label: "Registrar a Evento" },
    MenuEntry { path: "/dashboard/perfil", label: "Mi Perfil" },
];

/// Sidebar entries visible to a role.
pub(crate) fn menu_for_role(role: Role) -> &'static [MenuEntry] {
    match role {
        Role::Admin => MENU_ADMIN,
        Role::Empresa => MENU_EMPRESA,
        Role::Usuario => MENU_USUARIO,
    }
}

/// Where a role lands after login, and where the navbar toggle points.
pub(crate) fn dashboard_landing(role: Role) -> &'static str {
    match role {
        Role::Admin => "/dashboard/usuarios",
        Role::Empresa => "/dashboard/mis-eventos",
        Role::Usuario => "/dashboard/mis-inscripciones",
    }
}

/// Protected dashboard shell; any authenticated role may enter, the nested
/// routes narrow further.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Protected allowed=ANY_ROLE>
            <DashboardShell/>
        </Protected>
    }
}

#[component]
fn DashboardShell() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let entries = move || {
        session.get().user().map(|u| menu_for_role(u.role)).unwrap_or_default()
    };
    let nombre = move || {
        session.get().user().map(|u| u.nombre.clone()).unwrap_or_default()
    };

    view! {
        <div class="dashboard">
            <aside class="dashboard__sidebar">
                <h2 class="dashboard__sidebar-title">"Dashboard"</h2>
                <nav class="dashboard__menu">
                    {move || {
                        entries()
                            .iter()
                            .map(|entry| {
                                view! {
                                    <a class="dashboard__menu-link" href=entry.path>
                                        {entry.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
            </aside>

            <section class="dashboard__content">
                <h1 class="dashboard__welcome">{move || format!("Bienvenido, {}", nombre())}</h1>
                <Outlet/>
            </section>
        </div>
    }
}

/// Empty index view for `/dashboard` itself.
#[component]
pub fn DashboardIndex() -> impl IntoView {
    view! { <p class="page-message">"Selecciona una opción del menú."</p> }
}
