//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store holds
//! read-only snapshots of the engine; components never mutate these fields
//! directly, they go through `AppContext::run`.

use kanban_core::{Board, Column, Id, Kanban, StorageBackend, Task};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ToastList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All boards, in sidebar order
    pub boards: Vec<Board>,
    /// Board shown in the main area
    pub selected_board_id: Option<Id>,
    /// Columns of the selected board
    pub columns: Vec<Column>,
    /// Tasks inside those columns
    pub tasks: Vec<Task>,
    /// Notifications currently on screen
    pub toasts: ToastList,
}

impl AppState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            boards: snapshot.boards,
            selected_board_id: snapshot.selected_board_id,
            columns: snapshot.columns,
            tasks: snapshot.tasks,
            toasts: ToastList::default(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// What the UI renders, copied out of the engine
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub boards: Vec<Board>,
    pub selected_board_id: Option<Id>,
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
}

impl Snapshot {
    /// Take the selected board's columns, and only the tasks that sit in them
    pub fn of<B: StorageBackend>(kanban: &Kanban<B>) -> Self {
        let selected_board_id = kanban.selected_board_id().cloned();
        let columns: Vec<Column> = match &selected_board_id {
            Some(board_id) => kanban.columns_of(board_id).cloned().collect(),
            None => Vec::new(),
        };
        let tasks = kanban
            .tasks()
            .iter()
            .filter(|t| columns.iter().any(|c| c.id == t.column_id))
            .cloned()
            .collect();
        Self {
            boards: kanban.boards().to_vec(),
            selected_board_id,
            columns,
            tasks,
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Copy a snapshot into the store, touching only fields that changed
pub fn store_apply_snapshot(store: &AppStore, snapshot: Snapshot) {
    if store.boards().with_untracked(|b| *b != snapshot.boards) {
        store.boards().set(snapshot.boards);
    }
    if store.selected_board_id().with_untracked(|s| *s != snapshot.selected_board_id) {
        store.selected_board_id().set(snapshot.selected_board_id);
    }
    if store.columns().with_untracked(|c| *c != snapshot.columns) {
        store.columns().set(snapshot.columns);
    }
    if store.tasks().with_untracked(|t| *t != snapshot.tasks) {
        store.tasks().set(snapshot.tasks);
    }
}

/// Title of a board by id
pub fn store_board_title(store: &AppStore, id: &Id) -> String {
    store.boards().with(|boards| {
        boards.iter().find(|b| &b.id == id).map(|b| b.title.clone()).unwrap_or_default()
    })
}

/// Title of a column by id
pub fn store_column_title(store: &AppStore, id: &Id) -> String {
    store.columns().with(|columns| {
        columns.iter().find(|c| &c.id == id).map(|c| c.title.clone()).unwrap_or_default()
    })
}

/// Content of a task by id
pub fn store_task_content(store: &AppStore, id: &Id) -> String {
    store.tasks().with(|tasks| {
        tasks.iter().find(|t| &t.id == id).map(|t| t.content.clone()).unwrap_or_default()
    })
}

/// Tasks of one column, in order
pub fn store_column_tasks(store: &AppStore, column_id: &Id) -> Vec<Task> {
    store.tasks().with(|tasks| tasks.iter().filter(|t| &t.column_id == column_id).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_core::MemoryStorage;

    #[test]
    fn test_snapshot_shows_only_selected_board() {
        let storage = MemoryStorage::new();
        storage.seed("kanban_boards", r#"[{"id":1,"title":"Board 1"},{"id":2,"title":"Board 2"}]"#);
        storage.seed("selected_boardId", "1");
        // A column of board 2 that ended up in board 1's slot, and an orphan task
        storage.seed(
            "columns_1",
            r#"[{"id":"1-3","title":"Todo"},{"id":"2-4","boardId":2,"title":"Stray"}]"#,
        );
        storage.seed(
            "tasks_1",
            r#"[{"id":5,"columnId":"1-3","content":"a"},{"id":6,"columnId":"2-4","content":"b"},{"id":7,"columnId":"1-9","content":"c"}]"#,
        );
        let kanban = Kanban::load(storage);

        let snapshot = Snapshot::of(&kanban);
        assert_eq!(snapshot.boards.len(), 2);
        assert_eq!(snapshot.selected_board_id, Some(Id::Num(1)));
        assert_eq!(snapshot.columns.len(), 1);
        assert_eq!(snapshot.columns[0].id, Id::from("1-3"));
        assert_eq!(snapshot.tasks.len(), 1);
        assert_eq!(snapshot.tasks[0].id, Id::Num(5));
    }

    #[test]
    fn test_snapshot_without_selection_is_empty() {
        let mut kanban = Kanban::load(MemoryStorage::new());
        kanban.create_board().unwrap();
        let snapshot = Snapshot::of(&kanban);
        assert_eq!(snapshot.boards.len(), 1);
        assert!(snapshot.columns.is_empty());
        assert!(snapshot.tasks.is_empty());
    }
}
