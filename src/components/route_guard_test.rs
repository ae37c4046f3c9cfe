use super::*;
use crate::net::types::User;

fn session_with(role: Role) -> SessionState {
    SessionState {
        user: Some(User {
            id: "1".to_owned(),
            email: "a@b.com".to_owned(),
            name: "A".to_owned(),
            role,
        }),
        loading: false,
    }
}

// =============================================================
// Bootstrapping
// =============================================================

#[test]
fn bootstrapping_always_waits() {
    let state = SessionState::default();
    assert_eq!(decide(&state, &[]), GuardDecision::Wait);
    assert_eq!(decide(&state, &[Role::Admin]), GuardDecision::Wait);

    // Even a session with stored credentials waits while loading.
    let mut resolving = session_with(Role::Admin);
    resolving.loading = true;
    assert_eq!(decide(&resolving, &[Role::Admin]), GuardDecision::Wait);
}

// =============================================================
// Anonymous
// =============================================================

#[test]
fn anonymous_goes_to_login() {
    let state = SessionState { user: None, loading: false };
    assert_eq!(decide(&state, &[]), GuardDecision::ToLogin);
    assert_eq!(decide(&state, &[Role::Agent]), GuardDecision::ToLogin);
}

// =============================================================
// Authenticated
// =============================================================

#[test]
fn empty_role_set_admits_any_user() {
    assert_eq!(decide(&session_with(Role::Admin), &[]), GuardDecision::Allow);
    assert_eq!(decide(&session_with(Role::Agent), &[]), GuardDecision::Allow);
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(decide(&session_with(Role::Admin), &[Role::Admin]), GuardDecision::Allow);
    assert_eq!(
        decide(&session_with(Role::Agent), &[Role::Admin, Role::Agent]),
        GuardDecision::Allow
    );
}

#[test]
fn wrong_role_bounces_to_dashboard() {
    assert_eq!(
        decide(&session_with(Role::Agent), &[Role::Admin]),
        GuardDecision::ToDashboard
    );
}

// =============================================================
// Stored-agent scenario
// =============================================================

#[test]
fn stored_agent_session_scenario() {
    use crate::state::session_store::SessionStore;

    let store = SessionStore::in_memory();
    store.store(&crate::net::types::AuthTokens {
        token: "abc".to_owned(),
        user: User {
            id: "1".to_owned(),
            email: "a@b.com".to_owned(),
            name: "A".to_owned(),
            role: Role::Agent,
        },
    });

    let state = SessionState::from_store(&store);
    assert!(state.is_authenticated());

    assert_eq!(decide(&state, &[Role::Admin]), GuardDecision::ToDashboard);
    assert_eq!(decide(&state, &[Role::Agent]), GuardDecision::Allow);
    assert_eq!(decide(&state, &[]), GuardDecision::Allow);
}
