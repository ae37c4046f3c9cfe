#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Credentials;
use crate::validate::FieldErrors;

/// Check the login form. Credential checks beyond shape are the server's
/// job.
#[must_use]
pub fn validate_login(credentials: &Credentials) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let email = credentials.email.trim();
    if email.is_empty() {
        errors.insert("email", "El email es requerido");
    } else if !looks_like_email(email) {
        errors.insert("email", "Email inválido");
    }

    if credentials.password.is_empty() {
        errors.insert("password", "La contraseña es requerida");
    } else if credentials.password.len() < 6 {
        errors.insert("password", "La contraseña debe tener al menos 6 caracteres");
    }

    errors
}

/// Loose shape check: one `@` with something on both sides and a dot in
/// the domain.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
