use super::*;

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// =============================================================
// Acceptance
// =============================================================

#[test]
fn valid_credentials_pass() {
    let errors = validate_login(&credentials("agent1@costasuite.com", "agent123"));
    assert!(errors.is_empty());
}

// =============================================================
// Email
// =============================================================

#[test]
fn empty_email_is_required() {
    let errors = validate_login(&credentials("", "agent123"));
    assert_eq!(errors.get("email"), Some("El email es requerido"));
}

#[test]
fn malformed_email_is_rejected() {
    for bad in ["sin-arroba", "@dominio.com", "a@dominio", "a@.com"] {
        let errors = validate_login(&credentials(bad, "agent123"));
        assert_eq!(errors.get("email"), Some("Email inválido"), "case: {bad}");
    }
}

// =============================================================
// Password
// =============================================================

#[test]
fn empty_password_is_required() {
    let errors = validate_login(&credentials("a@b.com", ""));
    assert_eq!(errors.get("password"), Some("La contraseña es requerida"));
}

#[test]
fn short_password_is_rejected() {
    let errors = validate_login(&credentials("a@b.com", "12345"));
    assert_eq!(
        errors.get("password"),
        Some("La contraseña debe tener al menos 6 caracteres")
    );
}

#[test]
fn both_fields_reported_together() {
    let errors = validate_login(&credentials("", ""));
    assert_eq!(errors.len(), 2);
}
