//! In-process key-value store.

use super::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// HashMap-backed [`KeyValueStore`].
///
/// Cheap to clone (shares storage via Arc). Stands in for the host's
/// persistent store in tests and in hosts without one.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(key.to_string(), value.to_string());
                true
            }
            Err(_) => false,
        }
    }
}
