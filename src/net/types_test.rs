use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: 7,
        nombre: "Ana".to_owned(),
        correo: "ana@example.com".to_owned(),
        role: Role::Usuario,
        telefono: Some("3001234567".to_owned()),
        fecha_nacimiento: None,
        ciudad: Some("Bogotá".to_owned()),
    }
}

// =============================================================
// Role serde
// =============================================================

#[test]
fn role_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Empresa).unwrap(), "\"empresa\"");
    assert_eq!(serde_json::to_string(&Role::Usuario).unwrap(), "\"usuario\"");
}

#[test]
fn role_deserializes_from_lowercase() {
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"empresa\"").unwrap(), Role::Empresa);
    assert_eq!(serde_json::from_str::<Role>("\"usuario\"").unwrap(), Role::Usuario);
}

#[test]
fn role_rejects_unknown_tag() {
    assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
    assert!(serde_json::from_str::<Role>("\"gerente\"").is_err());
}

#[test]
fn role_id_round_trips() {
    for role in [Role::Admin, Role::Empresa, Role::Usuario] {
        assert_eq!(role_from_id(role.role_id()), Some(role));
    }
}

#[test]
fn role_from_id_rejects_unknown_id() {
    assert_eq!(role_from_id(0), None);
    assert_eq!(role_from_id(4), None);
}

// =============================================================
// User / LoginResponse
// =============================================================

#[test]
fn user_round_trips_through_json() {
    let user = make_user();
    let raw = serde_json::to_string(&user).unwrap();
    assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), user);
}

#[test]
fn user_id_accepts_float_encoded_integer() {
    let user: User = serde_json::from_str(
        r#"{"id": 7.0, "nombre": "Ana", "correo": "ana@example.com", "role": "usuario"}"#,
    )
    .unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.telefono, None);
}

#[test]
fn user_rejects_fractional_id() {
    let result = serde_json::from_str::<User>(
        r#"{"id": 7.5, "nombre": "Ana", "correo": "ana@example.com", "role": "usuario"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn login_response_parses_token_and_user() {
    let raw = r#"{
        "token": "jwt-abc",
        "user": {"id": 1, "nombre": "Root", "correo": "root@example.com", "role": "admin"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "jwt-abc");
    assert_eq!(resp.user.role, Role::Admin);
}

// =============================================================
// List rows
// =============================================================

#[test]
fn usuario_row_defaults_rol_to_usuario() {
    let row: Usuario =
        serde_json::from_str(r#"{"id": 3, "nombre": "Eva", "correo": "eva@example.com"}"#).unwrap();
    assert_eq!(row.rol, Role::Usuario.role_id());
}

#[test]
fn evento_row_defaults_numbers_and_estado() {
    let row: Evento = serde_json::from_str(
        r#"{"id": 9, "titulo": "Feria", "tipo_evento": "feria", "fecha_inicio": "2025-06-01T10:00:00.000Z"}"#,
    )
    .unwrap();
    assert_eq!(row.duracion_horas, 1);
    assert_eq!(row.capacidad_maxima, 0);
    assert_eq!(row.estado, EstadoEvento::Activo);
}

#[test]
fn estado_deserializes_from_lowercase_only() {
    assert_eq!(
        serde_json::from_str::<EstadoEvento>("\"finalizado\"").unwrap(),
        EstadoEvento::Finalizado
    );
    assert!(serde_json::from_str::<EstadoEvento>("\"Finalizado\"").is_err());
}

#[test]
fn inscripcion_row_parses_company_fields() {
    let row: Inscripcion = serde_json::from_str(
        r#"{"id_registro": 12, "evento": "Feria", "fecha": "2025-06-01T10:00:00.000Z",
            "lugar": "Medellín", "duracion": 4, "empresa": "Acme"}"#,
    )
    .unwrap();
    assert_eq!(row.id_registro, 12);
    assert_eq!(row.duracion, 4);
}

// =============================================================
// Payload serialization
// =============================================================

#[test]
fn usuario_payload_renames_password_field() {
    let payload = UsuarioPayload {
        nombre: "Ana".to_owned(),
        correo: "ana@example.com".to_owned(),
        contrasena: Some("secreta".to_owned()),
        telefono: String::new(),
        fecha_nacimiento: String::new(),
        ciudad: "Cali".to_owned(),
        role_id: Some(Role::Usuario.role_id()),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["contraseña"], "secreta");
    assert_eq!(value["role_id"], 3);
    assert!(value.get("contrasena").is_none());
}

#[test]
fn usuario_payload_omits_unset_password_and_role() {
    let payload = UsuarioPayload {
        nombre: "Ana".to_owned(),
        correo: "ana@example.com".to_owned(),
        ciudad: "Cali".to_owned(),
        ..UsuarioPayload::default()
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("contraseña").is_none());
    assert!(value.get("role_id").is_none());
}

#[test]
fn empresa_payload_carries_company_fields() {
    let payload = EmpresaPayload {
        nombre: "Acme".to_owned(),
        correo: "acme@example.com".to_owned(),
        contrasena: "secreta".to_owned(),
        telefono: String::new(),
        direccion: "Calle 1".to_owned(),
        ciudad: "Bogotá".to_owned(),
        tipo_empresa: "Cultural".to_owned(),
        role_id: Role::Empresa.role_id(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["contraseña"], "secreta");
    assert_eq!(value["role_id"], 2);
    assert_eq!(value["tipo_empresa"], "Cultural");
}

#[test]
fn evento_payload_attaches_user_id_only_when_present() {
    let mut payload = EventoPayload {
        titulo: "Feria".to_owned(),
        descripcion: String::new(),
        direccion: String::new(),
        tipo_evento: "feria".to_owned(),
        fecha_inicio: "2025-06-01T10:00".to_owned(),
        duracion_horas: 2,
        capacidad_maxima: 100,
        estado: EstadoEvento::Activo,
        user_id: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("user_id").is_none());
    assert_eq!(value["estado"], "activo");

    payload.user_id = Some(5);
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["user_id"], 5);
}

#[test]
fn inscripcion_payload_shape() {
    let payload = InscripcionPayload { user_id: 7, evento_id: 9 };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "user_id": 7, "evento_id": 9 })
    );
}
