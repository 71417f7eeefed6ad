//! Task Entity
//!
//! Tasks point at their column through `columnId`.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::Id;

/// Content given to freshly created tasks
pub const DEFAULT_TASK_CONTENT: &str = "Task content";

/// A card inside a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Id,
    pub column_id: Id,
    pub content: String,
}

impl Task {
    pub fn new(id: impl Into<Id>, column_id: Id, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            column_id,
            content: content.into(),
        }
    }

    /// Copy of this task moved under `column_id`
    pub fn reparented(&self, column_id: &Id) -> Self {
        Self {
            column_id: column_id.clone(),
            ..self.clone()
        }
    }
}

impl Entity for Task {
    fn id(&self) -> &Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_json_shape() {
        let task = Task::new(3u32, Id::from("1-2"), DEFAULT_TASK_CONTENT);
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":3,"columnId":"1-2","content":"Task content"}"#);
    }

    #[test]
    fn test_reparented_keeps_content() {
        let task = Task::new(3u32, Id::from("1-2"), "write docs");
        let moved = task.reparented(&Id::from("1-5"));
        assert_eq!(moved.column_id, Id::from("1-5"));
        assert_eq!(moved.id, task.id);
        assert_eq!(moved.content, task.content);
    }
}
