//! Durable persistence for the signed-in session.
//!
//! Exactly two entries are kept: the bearer `token` (raw string) and the
//! serialized `user` profile. The store is synchronous and never touches
//! the network. Storage lives behind a swappable backend so the session
//! machinery stays testable outside a browser; production code uses
//! `localStorage`, tests use an in-memory map.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::net::types::{AuthTokens, User};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Minimal synchronous key/value storage.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// `localStorage`-backed storage. All accesses are no-ops outside a
/// browser environment.
#[derive(Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().and_then(|s| s.get_item(key).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn delete(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn delete(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Handle to the persisted session entries. Cheap to clone; one instance
/// is provided via context at the app root.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    /// Store backed by `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::with_backend(Arc::new(BrowserStorage))
    }

    /// Store backed by an in-memory map.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryStorage::default()))
    }

    #[must_use]
    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// The stored bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.backend.read(TOKEN_KEY)
    }

    /// The stored user profile. A corrupt entry is deleted and treated as
    /// absent; this never fails.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let raw = self.backend.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                leptos::logging::warn!("discarding corrupt stored user: {err}");
                self.backend.delete(USER_KEY);
                None
            }
        }
    }

    /// Persist both session entries.
    pub fn store(&self, tokens: &AuthTokens) {
        self.backend.write(TOKEN_KEY, &tokens.token);
        if let Ok(user) = serde_json::to_string(&tokens.user) {
            self.backend.write(USER_KEY, &user);
        }
    }

    /// Delete both session entries.
    pub fn clear(&self) {
        self.backend.delete(TOKEN_KEY);
        self.backend.delete(USER_KEY);
    }

    /// Raw write, for seeding or corrupting entries in tests.
    #[cfg(test)]
    pub fn write_raw(&self, key: &str, value: &str) {
        self.backend.write(key, value);
    }
}
