//! In-memory backend
//!
//! Used by tests, and by the app when browser storage is unavailable.

use std::cell::RefCell;
use std::collections::HashMap;

use super::error::{StoreError, StoreResult};
use super::traits::StorageBackend;

/// `HashMap`-backed storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that rejects every write, like a full quota
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Raw contents of a slot
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Put raw text into a slot, bypassing the read-only flag
    pub fn seed(&self, key: &str, value: &str) {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.slots.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn check_writable(&self, key: &str) -> StoreResult<()> {
        if self.read_only {
            return Err(StoreError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        Ok(())
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check_writable(key)?;
        self.seed(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.check_writable(key)?;
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        storage.set("a", "1").unwrap();
        assert_eq!(storage.get("a").unwrap(), Some("1".to_string()));
        storage.remove("a").unwrap();
        assert_eq!(storage.get("a").unwrap(), None);
        storage.remove("a").unwrap();
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let storage = MemoryStorage::read_only();
        assert!(matches!(storage.set("a", "1"), Err(StoreError::Write { .. })));
        assert!(storage.remove("a").is_err());
        assert_eq!(storage.get("a").unwrap(), None);
    }
}
