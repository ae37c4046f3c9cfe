//! Session state machine and login/logout orchestration.
//!
//! ARCHITECTURE
//! ============
//! `SessionState` lives in an `RwSignal` provided at the app root and is the
//! single source of truth for "who is signed in" during one browsing
//! session. It starts in a bootstrapping state (`loading = true`,
//! `user = None`), resolves exactly once from the persisted store, and then
//! only moves between anonymous and authenticated via `login`/`logout`.
//!
//! Redirects are returned as `Destination` values rather than performed
//! here; the calling page navigates. That keeps this module free of the
//! router and exercisable in plain tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{GetUntracked, RwSignal, Set, Update};

use crate::net::error::ApiError;
use crate::net::types::{AuthTokens, Credentials, Role, User};
use crate::state::notify::NotifyState;
use crate::state::session_store::SessionStore;

/// Current session: the signed-in user, if any, and whether a transition
/// (bootstrap or sign-in) is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Bootstrapping: nothing resolved yet.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Resolve the session from the persisted store. A stored session
    /// counts only when both the token and the user entry are present; a
    /// half-written pair is cleared and treated as absent.
    #[must_use]
    pub fn from_store(store: &SessionStore) -> Self {
        let user = match (store.token(), store.user()) {
            (Some(_), Some(user)) => Some(user),
            (None, None) => None,
            _ => {
                store.clear();
                None
            }
        };
        Self { user, loading: false }
    }

    /// Apply a successful credential exchange: persist the tokens, install
    /// the user, and return where this role lands after sign-in.
    pub fn finish_login(&mut self, tokens: &AuthTokens, store: &SessionStore) -> Destination {
        store.store(tokens);
        self.user = Some(tokens.user.clone());
        self.loading = false;
        login_destination(tokens.user.role)
    }

    /// Conclude a failed sign-in attempt. The user is left untouched.
    pub fn fail_login(&mut self) {
        self.loading = false;
    }

    /// Clear the session. Always succeeds; no network involved.
    pub fn finish_logout(&mut self, store: &SessionStore) -> Destination {
        store.clear();
        self.user = None;
        self.loading = false;
        Destination::Home
    }
}

/// Where a navigation should land after a session transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    AdminDashboard,
    MyProperties,
    Home,
    Login,
}

impl Destination {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Destination::AdminDashboard => "/dashboard",
            Destination::MyProperties => "/dashboard/mis-propiedades",
            Destination::Home => "/",
            Destination::Login => "/auth/login",
        }
    }
}

/// Post-login landing page per role.
#[must_use]
pub fn login_destination(role: Role) -> Destination {
    match role {
        Role::Admin => Destination::AdminDashboard,
        Role::Agent => Destination::MyProperties,
    }
}

/// Resolve the session from storage. Runs once at app mount.
pub fn bootstrap(session: RwSignal<SessionState>, store: &SessionStore) {
    session.set(SessionState::from_store(store));
}

/// Exchange credentials for a session.
///
/// A second call while one is pending is rejected rather than raced. On
/// success the tokens are persisted, the user installed, and a welcome
/// toast pushed; the caller navigates to the returned destination. On
/// failure the user is untouched, an error toast is pushed with the
/// server's message when it gave one, and the fault is returned so the
/// form can react as well.
///
/// # Errors
///
/// `ApiError::InFlight` if a sign-in is already pending, otherwise any
/// fault from the auth endpoint.
pub async fn login(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    store: SessionStore,
    credentials: Credentials,
) -> Result<Destination, ApiError> {
    if session.get_untracked().loading {
        return Err(ApiError::InFlight);
    }
    session.update(|s| s.loading = true);

    match crate::net::auth::login(&credentials).await {
        Ok(tokens) => {
            let mut destination = Destination::Home;
            session.update(|s| destination = s.finish_login(&tokens, &store));
            notify.update(|n| { n.success("¡Bienvenido!"); });
            Ok(destination)
        }
        Err(err) => {
            session.update(SessionState::fail_login);
            notify.update(|n| { n.error(err.user_message("Error al iniciar sesión")); });
            Err(err)
        }
    }
}

/// End the session: clear storage and state, toast, and send the caller
/// to the public home page.
pub fn logout(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    store: &SessionStore,
) -> Destination {
    let mut destination = Destination::Home;
    session.update(|s| destination = s.finish_logout(store));
    notify.update(|n| { n.success("Sesión cerrada"); });
    destination
}
