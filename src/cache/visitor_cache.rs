//! Load/store of the two visitor fields under their fixed cache keys.

use super::KeyValueStore;
use crate::models::VisitorInput;
use std::sync::Arc;
use tracing::debug;

/// Binds a [`KeyValueStore`] to the two visitor-field keys.
///
/// Reads happen once at session start, writes on every field change.
/// A missing or failing store degrades to non-persistent input; the only
/// trace is a debug-level log line.
pub struct VisitorCache {
    store: Arc<dyn KeyValueStore>,
    name_key: String,
    email_key: String,
}

impl VisitorCache {
    /// Create a cache bound to the given keys.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        name_key: impl Into<String>,
        email_key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            name_key: name_key.into(),
            email_key: email_key.into(),
        }
    }

    /// Restore cached visitor fields; absent values come back empty.
    pub fn load(&self) -> VisitorInput {
        VisitorInput {
            name: self.store.get(&self.name_key).unwrap_or_default(),
            email: self.store.get(&self.email_key).unwrap_or_default(),
        }
    }

    /// Persist the name field. Failures are swallowed.
    pub fn store_name(&self, value: &str) {
        if !self.store.set(&self.name_key, value) {
            debug!("visitor name cache write unavailable");
        }
    }

    /// Persist the email field. Failures are swallowed.
    pub fn store_email(&self, value: &str) {
        if !self.store.set(&self.email_key, value) {
            debug!("visitor email cache write unavailable");
        }
    }
}
