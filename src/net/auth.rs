//! Credential exchange with the auth endpoint.
//!
//! Logout is purely local (handled by the session store); the server is
//! never notified, so tokens age out on their own.

use crate::net::error::ApiError;
use crate::net::types::{AuthTokens, Credentials};

/// `POST /auth/login`. Unlike the property and user endpoints, the
/// response body is the bare `AuthTokens`, not `{success, data}`.
///
/// # Errors
///
/// `ApiError::Http` with the server's `{message}` on rejected
/// credentials, `ApiError::Network` on transport failure.
pub async fn login(credentials: &Credentials) -> Result<AuthTokens, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        crate::net::api::post_json("/auth/login", credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}
