//! Storage Layer - Core Traits
//!
//! A backend is a flat string-keyed, string-valued map.
//! Implementations: browser local storage, in-memory.

use super::error::StoreResult;

/// Raw key/value backend
///
/// Calls are synchronous; a successful `set` is durable when it returns.
pub trait StorageBackend {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`; deleting an absent key succeeds
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
