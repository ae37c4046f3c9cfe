use super::*;

fn user_with_role(role: Role) -> User {
    User {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        name: "A".to_owned(),
        role,
    }
}

fn tokens_for(role: Role) -> AuthTokens {
    AuthTokens { token: "abc".to_owned(), user: user_with_role(role) }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_is_bootstrapping() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Bootstrap from storage
// =============================================================

#[test]
fn from_empty_store_is_anonymous() {
    let store = SessionStore::in_memory();
    let state = SessionState::from_store(&store);
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn from_populated_store_is_authenticated() {
    let store = SessionStore::in_memory();
    store.store(&tokens_for(Role::Agent));

    let state = SessionState::from_store(&store);
    assert!(state.is_authenticated());
    assert_eq!(state.user.unwrap().role, Role::Agent);
    assert!(!state.loading);
}

#[test]
fn token_without_user_is_cleared() {
    let store = SessionStore::in_memory();
    store.store(&tokens_for(Role::Agent));
    store.write_raw("user", "{corrupt");

    // The corrupt user entry is discarded on read, leaving a lone token,
    // which must not count as a session.
    let state = SessionState::from_store(&store);
    assert!(!state.is_authenticated());
    assert!(store.token().is_none());
}

// =============================================================
// Login transitions
// =============================================================

#[test]
fn finish_login_installs_user_and_persists() {
    let store = SessionStore::in_memory();
    let mut state = SessionState { user: None, loading: true };

    let destination = state.finish_login(&tokens_for(Role::Admin), &store);

    assert_eq!(destination, Destination::AdminDashboard);
    assert_eq!(state.user.as_ref().unwrap().role, Role::Admin);
    assert!(!state.loading);
    assert_eq!(store.token().as_deref(), Some("abc"));
    assert!(store.user().is_some());
}

#[test]
fn agent_login_lands_on_own_listings() {
    let store = SessionStore::in_memory();
    let mut state = SessionState { user: None, loading: true };
    let destination = state.finish_login(&tokens_for(Role::Agent), &store);
    assert_eq!(destination, Destination::MyProperties);
}

#[test]
fn fail_login_leaves_user_untouched() {
    let mut state = SessionState { user: None, loading: true };
    state.fail_login();
    assert!(state.user.is_none());
    assert!(!state.loading);

    let mut signed_in = SessionState {
        user: Some(user_with_role(Role::Agent)),
        loading: true,
    };
    signed_in.fail_login();
    assert!(signed_in.is_authenticated());
    assert!(!signed_in.loading);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn finish_logout_clears_state_and_store() {
    let store = SessionStore::in_memory();
    let mut state = SessionState { user: None, loading: true };
    state.finish_login(&tokens_for(Role::Admin), &store);

    let destination = state.finish_logout(&store);

    assert_eq!(destination, Destination::Home);
    assert!(state.user.is_none());
    assert!(store.token().is_none());
    assert!(store.user().is_none());
}

// =============================================================
// Destinations
// =============================================================

#[test]
fn destination_paths() {
    assert_eq!(Destination::AdminDashboard.path(), "/dashboard");
    assert_eq!(Destination::MyProperties.path(), "/dashboard/mis-propiedades");
    assert_eq!(Destination::Home.path(), "/");
    assert_eq!(Destination::Login.path(), "/auth/login");
}

#[test]
fn login_destination_per_role() {
    assert_eq!(login_destination(Role::Admin), Destination::AdminDashboard);
    assert_eq!(login_destination(Role::Agent), Destination::MyProperties);
}
