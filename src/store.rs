use std::collections::HashMap;
use std::sync::Mutex;

/// Session-store slot holding the raw auth token.
pub const TOKEN_KEY: &str = "xano_auth_token";

/// Session-store slot holding the JSON-serialized user record.
pub const USER_KEY: &str = "xano_user_data";

/// Persistence for the two session slots.
///
/// The client owns the slot keys ([`TOKEN_KEY`], [`USER_KEY`]) and expects
/// atomic per-slot read/write semantics from the implementation. Concurrent
/// writers racing on a slot are accepted: last write wins.
///
/// # Example
///
/// ```rust,ignore
/// struct FileStore { path: PathBuf }
///
/// impl SessionStore for FileStore {
///     fn get(&self, key: &str) -> Option<String> {
///         self.read_map().ok()?.get(key).cloned()
///     }
///
///     fn set(&self, key: &str, value: &str) {
///         let _ = self.update_map(|map| map.insert(key.into(), value.into()));
///     }
///
///     fn remove(&self, key: &str) {
///         let _ = self.update_map(|map| map.remove(key));
///     }
/// }
/// ```
pub trait SessionStore: Send + Sync {
    /// Read a slot. `None` if the slot is empty or the store is unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a slot, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Clear a slot. Must not fail when the slot is already empty.
    fn remove(&self, key: &str);
}

/// In-memory [`SessionStore`], the default for a new client.
///
/// Sessions live as long as the store; use a persistent implementation to
/// survive process restarts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    // A poisoned lock degrades to "storage unavailable": reads are absent,
    // writes are dropped.
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
    }
}
