use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  ana@example.com  ", "secreta"),
        Ok(("ana@example.com".to_owned(), "secreta".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("", "secreta"), Err("Ingresa correo y contraseña."));
    assert_eq!(validate_credentials("   ", "secreta"), Err("Ingresa correo y contraseña."));
    assert_eq!(validate_credentials("ana@example.com", ""), Err("Ingresa correo y contraseña."));
}
