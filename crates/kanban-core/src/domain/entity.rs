//! Domain Layer - Core Entity Trait
//!
//! Every board, column and task is addressed by an [`Id`].

use super::id::Id;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// Returns the entity's identifier
    fn id(&self) -> &Id;
}

/// Position of the entity with `id` in `items`
pub fn index_of<T: Entity>(items: &[T], id: &Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
