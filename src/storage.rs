//! Browser Storage Backend
//!
//! `window.localStorage` behind the core `StorageBackend` trait.

use kanban_core::{MemoryStorage, StorageBackend, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// `localStorage` handle
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Open `window.localStorage`
    pub fn open() -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_message(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: js_message(&e),
        })
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.storage.remove_item(key).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: js_message(&e),
        })
    }
}

/// Storage the app runs on: the browser's, or memory when that is missing
pub enum AppStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl AppStorage {
    /// Use the browser's storage if it opened, memory otherwise
    pub fn from_opened(opened: StoreResult<BrowserStorage>) -> Self {
        match opened {
            Ok(browser) => AppStorage::Browser(browser),
            Err(e) => {
                log::error!("{}; changes will not survive a reload", e);
                AppStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl StorageBackend for AppStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self {
            AppStorage::Browser(s) => s.get(key),
            AppStorage::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        match self {
            AppStorage::Browser(s) => s.set(key, value),
            AppStorage::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match self {
            AppStorage::Browser(s) => s.remove(key),
            AppStorage::Memory(s) => s.remove(key),
        }
    }
}
