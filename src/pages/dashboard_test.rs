use super::*;

// =============================================================
// Menu tables
// =============================================================

#[test]
fn admin_menu_manages_users_and_companies() {
    let paths: Vec<&str> = menu_for_role(Role::Admin).iter().map(|e| e.path).collect();
    assert_eq!(paths, vec!["/dashboard/usuarios", "/dashboard/empresas"]);
}

#[test]
fn empresa_menu_covers_event_management() {
    let paths: Vec<&str> = menu_for_role(Role::Empresa).iter().map(|e| e.path).collect();
    assert_eq!(
        paths,
        vec![
            "/dashboard/mis-eventos",
            "/dashboard/gestion-eventos",
            "/dashboard/registro-eventos",
        ]
    );
}

#[test]
fn usuario_menu_covers_registrations_and_profile() {
    let paths: Vec<&str> = menu_for_role(Role::Usuario).iter().map(|e| e.path).collect();
    assert_eq!(
        paths,
        vec![
            "/dashboard/mis-inscripciones",
            "/dashboard/registrar-evento",
            "/dashboard/perfil",
        ]
    );
}

#[test]
fn menus_never_share_entries_across_roles() {
    let admin: Vec<&str> = menu_for_role(Role::Admin).iter().map(|e| e.path).collect();
    let empresa: Vec<&str> = menu_for_role(Role::Empresa).iter().map(|e| e.path).collect();
    let usuario: Vec<&str> = menu_for_role(Role::Usuario).iter().map(|e| e.path).collect();
    for path in &admin {
        assert!(!empresa.contains(path) && !usuario.contains(path));
    }
    for path in &empresa {
        assert!(!usuario.contains(path));
    }
}

// =============================================================
// Landing routes
// =============================================================

#[test]
fn empresa_lands_on_company_events_dashboard() {
    assert_eq!(dashboard_landing(Role::Empresa), "/dashboard/mis-eventos");
}

#[test]
fn admin_and_usuario_land_on_their_sections() {
    assert_eq!(dashboard_landing(Role::Admin), "/dashboard/usuarios");
    assert_eq!(dashboard_landing(Role::Usuario), "/dashboard/mis-inscripciones");
}

#[test]
fn every_landing_route_appears_in_the_same_roles_menu() {
    for role in [Role::Admin, Role::Empresa, Role::Usuario] {
        let landing = dashboard_landing(role);
        assert!(
            menu_for_role(role).iter().any(|e| e.path == landing),
            "landing {landing} missing from {role:?} menu"
        );
    }
}
