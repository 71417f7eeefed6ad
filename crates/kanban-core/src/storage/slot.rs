//! Slot Store
//!
//! Owns every storage key and the JSON encoding of what lives under it.
//! Loads never fail: anything unreadable is reported as absent.

use std::fmt;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::StoreResult;
use super::traits::StorageBackend;
use crate::domain::Id;

/// Named storage slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotKey {
    /// All boards, in display order
    Boards,
    /// The selected board id, or `null`
    SelectedBoard,
    /// Columns of one board
    Columns(Id),
    /// Tasks of one board
    Tasks(Id),
    /// App configuration
    Config,
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKey::Boards => f.write_str("kanban_boards"),
            SlotKey::SelectedBoard => f.write_str("selected_boardId"),
            SlotKey::Columns(board) => write!(f, "columns_{}", board),
            SlotKey::Tasks(board) => write!(f, "tasks_{}", board),
            SlotKey::Config => f.write_str("kanban_config"),
        }
    }
}

/// Typed access to a [`StorageBackend`]
#[derive(Debug)]
pub struct SlotStore<B> {
    backend: B,
}

impl<B: StorageBackend> SlotStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Serialize `value` and overwrite the slot
    pub fn save<T: Serialize + ?Sized>(&self, slot: &SlotKey, value: &T) -> StoreResult<()> {
        let key = slot.to_string();
        let text = serde_json::to_string(value)?;
        debug!("save {} ({} bytes)", key, text.len());
        self.backend.set(&key, &text)
    }

    /// Read and deserialize the slot
    ///
    /// Returns `None` for an empty slot, a backend read failure, or text
    /// that does not decode as `T`.
    pub fn load<T: DeserializeOwned>(&self, slot: &SlotKey) -> Option<T> {
        let key = slot.to_string();
        let text = match self.backend.get(&key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                warn!("cannot read {}: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("ignoring malformed {}: {}", key, e);
                None
            }
        }
    }

    /// Read a collection slot, empty when absent or malformed
    pub fn load_vec<T: DeserializeOwned>(&self, slot: &SlotKey) -> Vec<T> {
        self.load(slot).unwrap_or_default()
    }

    /// Remove the slot entirely
    pub fn clear(&self, slot: &SlotKey) -> StoreResult<()> {
        let key = slot.to_string();
        debug!("clear {}", key);
        self.backend.remove(&key)
    }
}
