//! Visitor-field persistence over a host key-value capability.

pub mod memory_store;
pub mod visitor_cache;

pub use memory_store::MemoryStore;
pub use visitor_cache::VisitorCache;

/// Minimal key-value capability the host may provide.
///
/// Absence or failure of the store is a normal code path, not an error:
/// `get` answers `None` and `set` answers `false`, and the caller degrades
/// to non-persistent input with no user-visible effect.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, or `None` when missing or the store is unavailable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value; `false` means the write was refused or the store is
    /// unavailable.
    fn set(&self, key: &str, value: &str) -> bool;
}
