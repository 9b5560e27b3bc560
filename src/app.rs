//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::dashboard::{DashboardIndex, DashboardPage};
use crate::pages::empresas::EmpresasPage;
use crate::pages::eventos::EventosPage;
use crate::pages::home::HomePage;
use crate::pages::inscripciones::InscripcionesPage;
use crate::pages::login::LoginPage;
use crate::pages::mis_eventos::MisEventosPage;
use crate::pages::perfil::PerfilPage;
use crate::pages::register::RegisterPage;
use crate::pages::registrar::RegistrarEventoPage;
use crate::pages::registros::RegistrosPage;
use crate::pages::usuarios::UsuariosPage;
use crate::state::session::SessionContext;

/// Root application component.
///
/// Provides the session context (restored from localStorage) and sets up
/// client-side routing. Role narrowing happens inside each protected page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    SessionContext::provide();

    view! {
        <Title text="Eventos Colombia"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <ParentRoute path=StaticSegment("dashboard") view=DashboardPage>
                        <Route path=StaticSegment("") view=DashboardIndex/>
                        <Route path=StaticSegment("usuarios") view=UsuariosPage/>
                        <Route path=StaticSegment("empresas") view=EmpresasPage/>
                        <Route path=StaticSegment("mis-eventos") view=MisEventosPage/>
                        <Route path=StaticSegment("gestion-eventos") view=EventosPage/>
                        <Route path=StaticSegment("registro-eventos") view=RegistrosPage/>
                        <Route path=StaticSegment("mis-inscripciones") view=InscripcionesPage/>
                        <Route path=StaticSegment("registrar-evento") view=RegistrarEventoPage/>
                        <Route path=StaticSegment("perfil") view=PerfilPage/>
                    </ParentRoute>
                </Routes>
            </Layout>
        </Router>
    }
}
