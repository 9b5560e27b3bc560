use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn auth_endpoints_join_base_and_path() {
    assert_eq!(login_endpoint(), format!("{}/auth/login", api_base()));
    assert_eq!(register_endpoint(), format!("{}/auth/register", api_base()));
}

#[test]
fn user_endpoints_embed_record_id() {
    assert!(listar_usuarios_endpoint().ends_with("/users/listar-usuarios"));
    assert!(actualizar_usuario_endpoint(7).ends_with("/users/actualizar-usuario/7"));
    assert!(eliminar_usuario_endpoint(7).ends_with("/users/eliminar-usuario/7"));
}

#[test]
fn empresa_endpoints_embed_record_id() {
    assert!(listar_empresas_endpoint().ends_with("/empresas/listar-empresas"));
    assert!(actualizar_empresa_endpoint(3).ends_with("/empresas/actualizar-empresa/3"));
    assert!(eliminar_empresa_endpoint(3).ends_with("/empresas/eliminar-empresa/3"));
}

#[test]
fn evento_endpoints_embed_record_id() {
    assert!(listar_eventos_endpoint().ends_with("/eventos/listar-eventos"));
    assert!(crear_evento_endpoint().ends_with("/eventos/crear-evento"));
    assert!(actualizar_evento_endpoint(9).ends_with("/eventos/actualizar-evento/9"));
    assert!(eliminar_evento_endpoint(9).ends_with("/eventos/eliminar-evento/9"));
}

#[test]
fn registro_endpoints_embed_record_id() {
    assert!(listar_registros_endpoint().ends_with("/registro-evento/listar-registros"));
    assert!(
        listar_registros_usuario_endpoint().ends_with("/registro-evento/listar-registros-usuario")
    );
    assert!(registrar_evento_endpoint().ends_with("/registro-evento/registrar-evento"));
    assert!(eliminar_registro_endpoint(12).ends_with("/registro-evento/eliminar-registro/12"));
}

#[test]
fn endpoints_share_the_configured_base() {
    for url in [
        login_endpoint(),
        listar_usuarios_endpoint(),
        listar_eventos_endpoint(),
        listar_registros_endpoint(),
    ] {
        assert!(url.starts_with(api_base()), "unexpected base in {url}");
    }
}

// =============================================================
// Bearer header
// =============================================================

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("jwt-abc"), "Bearer jwt-abc");
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn status_error_extracts_backend_message() {
    let err = status_error(409, r#"{"error": "Ya estás registrado en este evento"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 409,
            message: Some("Ya estás registrado en este evento".to_owned()),
        }
    );
    assert_eq!(err.backend_message(), Some("Ya estás registrado en este evento"));
}

#[test]
fn status_error_without_json_body_has_no_message() {
    let err = status_error(500, "Internal Server Error");
    assert_eq!(err, ApiError::Status { status: 500, message: None });
    assert_eq!(err.backend_message(), None);
}

#[test]
fn status_error_ignores_non_string_error_field() {
    let err = status_error(400, r#"{"error": 42}"#);
    assert_eq!(err.backend_message(), None);
}

#[test]
fn display_or_prefers_backend_message() {
    let rejected = status_error(400, r#"{"error": "correo duplicado"}"#);
    assert_eq!(rejected.display_or("Error actualizando empresa"), "correo duplicado");

    let network = ApiError::Network("timeout".to_owned());
    assert_eq!(network.display_or("Error actualizando empresa"), "Error actualizando empresa");
}

#[test]
fn api_error_display_includes_status() {
    let err = ApiError::Status { status: 401, message: None };
    assert_eq!(err.to_string(), "request failed: 401");
}
