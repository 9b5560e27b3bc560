use super::*;
use crate::net::types::Role;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: 7,
        nombre: "Ana".to_owned(),
        correo: "ana@example.com".to_owned(),
        role: Role::Empresa,
        telefono: None,
        fecha_nacimiento: None,
        ciudad: Some("Bogotá".to_owned()),
    }
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.authenticated());
    assert!(state.user().is_none());
    assert!(state.token().is_none());
}

#[test]
fn login_snapshot_returns_exactly_what_was_stored() {
    let mut state = SessionState::default();
    state.login(make_user(), "jwt-abc".to_owned());
    assert!(state.authenticated());
    assert_eq!(state.user(), Some(&make_user()));
    assert_eq!(state.token(), Some("jwt-abc"));
}

#[test]
fn login_overwrites_previous_session() {
    let mut state = SessionState::default();
    state.login(make_user(), "first".to_owned());

    let mut other = make_user();
    other.id = 8;
    other.nombre = "Luis".to_owned();
    state.login(other.clone(), "second".to_owned());

    assert_eq!(state.user(), Some(&other));
    assert_eq!(state.token(), Some("second"));
}

#[test]
fn logout_clears_user_and_token_together() {
    let mut state = SessionState::default();
    state.login(make_user(), "jwt-abc".to_owned());
    state.logout();
    assert!(!state.authenticated());
    assert!(state.user().is_none());
    assert!(state.token().is_none());
}

// =============================================================
// Restoration from persisted entries
// =============================================================

#[test]
fn restore_round_trips_a_persisted_session() {
    let user = make_user();
    let raw_user = serde_json::to_string(&user).unwrap();

    let restored = session_from_raw(Some(raw_user), Some("jwt-abc".to_owned())).unwrap();
    assert_eq!(restored.user, user);
    assert_eq!(restored.token, "jwt-abc");
}

#[test]
fn restore_without_token_is_unauthenticated() {
    let raw_user = serde_json::to_string(&make_user()).unwrap();
    assert!(session_from_raw(Some(raw_user), None).is_none());
}

#[test]
fn restore_with_empty_token_is_unauthenticated() {
    let raw_user = serde_json::to_string(&make_user()).unwrap();
    assert!(session_from_raw(Some(raw_user), Some(String::new())).is_none());
}

#[test]
fn restore_without_user_is_unauthenticated() {
    assert!(session_from_raw(None, Some("jwt-abc".to_owned())).is_none());
}

#[test]
fn restore_with_malformed_user_is_unauthenticated() {
    let restored = session_from_raw(Some("{not json".to_owned()), Some("jwt-abc".to_owned()));
    assert!(restored.is_none());
}

#[test]
fn restore_with_unknown_role_is_unauthenticated() {
    let raw_user = r#"{"id": 1, "nombre": "X", "correo": "x@example.com", "role": "gerente"}"#;
    assert!(session_from_raw(Some(raw_user.to_owned()), Some("jwt-abc".to_owned())).is_none());
}
