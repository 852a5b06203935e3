use contact_card::cache::KeyValueStore;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock key-value store for testing.
///
/// In-memory implementation that can be switched into an "unavailable"
/// mode where reads answer `None` and writes are refused, and that tracks
/// call counts for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    unavailable: Arc<AtomicBool>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Toggle unavailable mode (simulates a host without a store).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    fn record(&self, method: &str) {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl KeyValueStore for MockKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.record("get");
        if self.unavailable.load(Ordering::SeqCst) {
            return None;
        }
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.record("set");
        if self.unavailable.load(Ordering::SeqCst) {
            return false;
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        true
    }
}
