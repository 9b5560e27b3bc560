use super::*;

fn filled_form() -> RegistroForm {
    RegistroForm {
        nombre: "Ana".to_owned(),
        correo: "ana@example.com".to_owned(),
        contrasena: "secreta".to_owned(),
        telefono: String::new(),
        fecha_nacimiento: String::new(),
        ciudad: "Cali".to_owned(),
    }
}

#[test]
fn validate_accepts_required_fields() {
    assert_eq!(validate(&filled_form()), Ok(()));
}

#[test]
fn validate_rejects_missing_required_fields() {
    for mutate in [
        (|f: &mut RegistroForm| f.nombre.clear()) as fn(&mut RegistroForm),
        |f| f.correo = "   ".to_owned(),
        |f| f.contrasena.clear(),
        |f| f.ciudad.clear(),
    ] {
        let mut form = filled_form();
        mutate(&mut form);
        assert_eq!(validate(&form), Err("Por favor complete todos los campos obligatorios."));
    }
}

#[test]
fn optional_fields_are_not_required() {
    let form = filled_form();
    assert!(form.telefono.is_empty() && form.fecha_nacimiento.is_empty());
    assert_eq!(validate(&form), Ok(()));
}

#[test]
fn payload_registers_as_end_user() {
    let payload = payload_from_form(&filled_form());
    assert_eq!(payload.role_id, Some(3));
    assert_eq!(payload.contrasena.as_deref(), Some("secreta"));
    assert_eq!(payload.nombre, "Ana");
}
