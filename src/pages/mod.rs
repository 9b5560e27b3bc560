//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state, delete
//! confirmation) and delegates shared chrome to `components`. Protected pages
//! wrap their content in `Protected`, so denied visits render nothing and
//! fetch nothing.

pub mod dashboard;
pub mod empresas;
pub mod eventos;
pub mod home;
pub mod inscripciones;
pub mod login;
pub mod mis_eventos;
pub mod perfil;
pub mod register;
pub mod registrar;
pub mod registros;
pub mod usuarios;
