use super::*;

// =============================================================
// Push and dismiss
// =============================================================

#[test]
fn push_appends_in_order() {
    let mut state = NotifyState::default();
    state.success("uno");
    state.error("dos");

    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
    assert_eq!(state.toasts[1].message, "dos");
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = NotifyState::default();
    let first = state.success("uno");
    state.success("dos");

    state.dismiss(first);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "dos");
}

#[test]
fn dismiss_unknown_id_is_ignored() {
    let mut state = NotifyState::default();
    state.success("uno");
    state.dismiss(Uuid::new_v4());
    assert_eq!(state.toasts.len(), 1);
}
