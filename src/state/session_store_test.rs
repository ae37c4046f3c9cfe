use super::*;
use crate::net::types::Role;

fn sample_tokens() -> AuthTokens {
    AuthTokens {
        token: "abc".to_owned(),
        user: User {
            id: "1".to_owned(),
            email: "a@b.com".to_owned(),
            name: "A".to_owned(),
            role: Role::Agent,
        },
    }
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn store_then_read_round_trips() {
    let store = SessionStore::in_memory();
    let tokens = sample_tokens();
    store.store(&tokens);

    assert_eq!(store.token().as_deref(), Some("abc"));
    assert_eq!(store.user(), Some(tokens.user));
}

#[test]
fn empty_store_reads_nothing() {
    let store = SessionStore::in_memory();
    assert!(store.token().is_none());
    assert!(store.user().is_none());
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_removes_both_entries() {
    let store = SessionStore::in_memory();
    store.store(&sample_tokens());
    store.clear();

    assert!(store.token().is_none());
    assert!(store.user().is_none());
}

// =============================================================
// Corrupt user entry
// =============================================================

#[test]
fn corrupt_user_entry_is_deleted_and_none() {
    let store = SessionStore::in_memory();
    store.store(&sample_tokens());
    store.write_raw("user", "{not json");

    assert!(store.user().is_none());
    // The corrupt entry was removed, so a second read is also clean.
    assert!(store.user().is_none());
    // The token entry is untouched.
    assert_eq!(store.token().as_deref(), Some("abc"));
}

#[test]
fn wrong_shape_user_entry_is_deleted() {
    let store = SessionStore::in_memory();
    store.write_raw("user", r#"{"unexpected":"shape"}"#);
    assert!(store.user().is_none());
    assert!(store.user().is_none());
}

// =============================================================
// Browser backend outside a browser
// =============================================================

#[test]
fn browser_backend_is_inert_natively() {
    let store = SessionStore::browser();
    store.store(&sample_tokens());
    assert!(store.token().is_none());
    assert!(store.user().is_none());
}
