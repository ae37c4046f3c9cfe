//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `session_store`, `notify`) so
//! pages and components can depend on small focused models. Each lives in
//! an `RwSignal` provided via context at the app root; no module-level
//! mutable state anywhere.

pub mod notify;
pub mod session;
pub mod session_store;
