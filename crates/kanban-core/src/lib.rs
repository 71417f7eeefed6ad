//! Kanban Core
//!
//! Layered like this:
//! - domain: boards, columns, tasks, identifiers
//! - storage: key/value backends and the typed slot store
//! - reorder: pure drag-and-drop reordering rules
//! - kanban: the state engine tying them together

pub mod domain;
pub mod kanban;
pub mod reorder;
pub mod storage;

pub use domain::{Board, Column, Entity, Id, IdGenerator, Task};
pub use kanban::{BoardContents, Kanban};
pub use reorder::{DragItem, DragPhase};
pub use storage::{MemoryStorage, SlotKey, SlotStore, StorageBackend, StoreError, StoreResult};
