use super::*;

// =============================================================
// Server message extraction
// =============================================================

#[test]
fn http_fault_exposes_server_message() {
    let err = ApiError::Http {
        status: 401,
        message: Some("bad credentials".to_owned()),
    };
    assert_eq!(err.server_message(), Some("bad credentials"));
    assert_eq!(err.user_message("Error al iniciar sesión"), "bad credentials");
}

#[test]
fn http_fault_without_message_uses_fallback() {
    let err = ApiError::Http { status: 500, message: None };
    assert_eq!(err.server_message(), None);
    assert_eq!(err.user_message("Error al iniciar sesión"), "Error al iniciar sesión");
}

#[test]
fn network_fault_uses_fallback() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("No se pudo conectar"), "No se pudo conectar");
}

// =============================================================
// Display
// =============================================================

#[test]
fn display_includes_status() {
    let err = ApiError::Http { status: 404, message: None };
    assert_eq!(err.to_string(), "HTTP 404: no detail");
}
