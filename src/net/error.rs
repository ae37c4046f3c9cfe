//! API fault taxonomy.
//!
//! Faults are caught at the page or session boundary that issued the call
//! and surfaced as toasts; none propagate into the rendering layer.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `message` carries the server's `{message}` body
    /// field when present.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no detail"))]
    Http { status: u16, message: Option<String> },
    /// Transport-level failure before any response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// A sign-in attempt was issued while another is still pending.
    #[error("sign-in already in progress")]
    InFlight,
    /// The API was called outside a browser context (SSR stub).
    #[error("api not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// The server-supplied message, if the fault carries one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// User-facing notification text: the server's own message when it gave
    /// one, otherwise the caller's generic fallback.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().map_or_else(|| fallback.to_owned(), str::to_owned)
    }
}
