#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use uuid::Uuid;

/// State for the toast notification stack.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub toasts: Vec<Toast>,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl NotifyState {
    /// Push a success toast; returns its id for later dismissal.
    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message.into())
    }

    /// Push an error toast; returns its id for later dismissal.
    pub fn error(&mut self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, message.into())
    }

    fn push(&mut self, kind: ToastKind, message: String) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast { id, kind, message });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }
}
