//! Domain Layer
//!
//! Boards, columns, tasks and their identifiers.
//! No storage or UI concerns live here.

mod board;
mod column;
mod entity;
mod id;
mod task;

pub use board::Board;
pub use column::Column;
pub use entity::{index_of, Entity};
pub use id::{Id, IdGenerator, ID_UPPER_BOUND};
pub use task::{Task, DEFAULT_TASK_CONTENT};
