use super::*;
use crate::net::types::Role;

fn make_user() -> User {
    User {
        id: 7,
        nombre: "Ana".to_owned(),
        correo: "ana@example.com".to_owned(),
        role: Role::Usuario,
        telefono: Some("3001234567".to_owned()),
        fecha_nacimiento: None,
        ciudad: Some("Cali".to_owned()),
    }
}

#[test]
fn form_seeds_from_session_user() {
    let form = form_from_user(&make_user());
    assert_eq!(form.nombre, "Ana");
    assert_eq!(form.telefono, "3001234567");
    assert!(form.fecha_nacimiento.is_empty());
    assert_eq!(form.ciudad, "Cali");
}

#[test]
fn payload_never_carries_password_or_role() {
    let payload = payload_from_form(&form_from_user(&make_user()));
    assert_eq!(payload.contrasena, None);
    assert_eq!(payload.role_id, None);
    assert_eq!(payload.nombre, "Ana");
}

#[test]
fn apply_perfil_updates_fields_but_keeps_identity() {
    let user = make_user();
    let form = PerfilForm {
        nombre: "Ana María".to_owned(),
        correo: "anamaria@example.com".to_owned(),
        telefono: String::new(),
        fecha_nacimiento: "1990-04-02".to_owned(),
        ciudad: "Medellín".to_owned(),
    };
    let updated = apply_perfil(&user, &form);
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.role, user.role);
    assert_eq!(updated.nombre, "Ana María");
    assert_eq!(updated.telefono, None);
    assert_eq!(updated.fecha_nacimiento.as_deref(), Some("1990-04-02"));
    assert_eq!(updated.ciudad.as_deref(), Some("Medellín"));
}
