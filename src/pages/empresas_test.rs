use super::*;

fn make_empresa() -> Empresa {
    Empresa {
        id: 3,
        nombre: "Acme".to_owned(),
        correo: "acme@example.com".to_owned(),
        telefono: None,
        direccion: Some("Calle 1 #2-3".to_owned()),
        ciudad: Some("Bogotá".to_owned()),
        tipo_empresa: Some("Cultural".to_owned()),
    }
}

// =============================================================
// Form <-> payload mapping
// =============================================================

#[test]
fn default_form_targets_company_role() {
    assert_eq!(EmpresaForm::default().role_id, 2);
}

#[test]
fn create_payload_carries_the_full_form() {
    let form = EmpresaForm {
        nombre: "Acme".to_owned(),
        correo: "acme@example.com".to_owned(),
        contrasena: "secreta".to_owned(),
        ciudad: "Bogotá".to_owned(),
        direccion: "Calle 1".to_owned(),
        tipo_empresa: "Cultural".to_owned(),
        ..EmpresaForm::default()
    };
    let payload = create_payload(&form);
    assert_eq!(payload.role_id, 2);
    assert_eq!(payload.contrasena, "secreta");
    assert_eq!(payload.tipo_empresa, "Cultural");
}

#[test]
fn update_payload_sends_only_the_accepted_subset() {
    let form = EmpresaForm {
        nombre: "Acme".to_owned(),
        correo: "acme@example.com".to_owned(),
        contrasena: "never-sent".to_owned(),
        direccion: "Calle 1".to_owned(),
        ciudad: "Bogotá".to_owned(),
        tipo_empresa: "Cultural".to_owned(),
        ..EmpresaForm::default()
    };
    assert_eq!(
        update_payload(&form),
        EmpresaUpdatePayload {
            direccion: "Calle 1".to_owned(),
            ciudad: "Bogotá".to_owned(),
            tipo_empresa: "Cultural".to_owned(),
        }
    );
}

#[test]
fn form_from_empresa_blanks_password_and_resets_role() {
    let form = form_from_empresa(&make_empresa());
    assert!(form.contrasena.is_empty());
    assert_eq!(form.role_id, 2);
    assert_eq!(form.direccion, "Calle 1 #2-3");
    assert!(form.telefono.is_empty());
}

// =============================================================
// Select parsing
// =============================================================

#[test]
fn parse_role_id_only_offers_empresa_and_usuario() {
    assert_eq!(parse_role_id("2"), 2);
    assert_eq!(parse_role_id("3"), 3);
    assert_eq!(parse_role_id("1"), 2);
    assert_eq!(parse_role_id(""), 2);
}
