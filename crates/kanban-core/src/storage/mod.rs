//! Storage Layer
//!
//! Backends and the typed slot store built on top of them.

mod error;
mod memory;
mod slot;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStorage;
pub use slot::{SlotKey, SlotStore};
pub use traits::StorageBackend;
