//! Kanban State Engine
//!
//! Owns the in-memory boards, the selection pointer and the contents of the
//! selected board. Every mutation updates memory first, then writes the
//! affected slots before returning. A failed write is reported to the
//! caller while the in-memory change is kept.

use log::{debug, info};

use crate::domain::{index_of, Board, Column, Id, IdGenerator, Task, DEFAULT_TASK_CONTENT};
use crate::reorder::{self, DragItem, DragPhase, Reordered};
use crate::storage::{SlotKey, SlotStore, StorageBackend, StoreResult};

/// Columns and tasks loaded from one board's slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardContents {
    pub board_id: Id,
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
}

impl BoardContents {
    fn has_column(&self, column_id: &Id) -> bool {
        self.columns
            .iter()
            .any(|c| &c.id == column_id && c.belongs_to(&self.board_id))
    }
}

/// The board/column/task state engine
#[derive(Debug)]
pub struct Kanban<B> {
    store: SlotStore<B>,
    ids: IdGenerator,
    boards: Vec<Board>,
    selected: Option<Id>,
    open: Option<BoardContents>,
}

impl<B: StorageBackend> Kanban<B> {
    /// Load boards, selection and the selected board's contents
    pub fn load(backend: B) -> Self {
        let store = SlotStore::new(backend);
        let boards: Vec<Board> = store.load_vec(&SlotKey::Boards);
        let stored_selection = store.load::<Option<Id>>(&SlotKey::SelectedBoard).flatten();

        let mut ids = IdGenerator::new();
        ids.observe_all(boards.iter().map(|b| &b.id));

        let selected = match stored_selection {
            Some(id) if index_of(&boards, &id).is_some() => Some(id),
            Some(id) => {
                debug!("dropping selection of missing board {}", id);
                None
            }
            None => None,
        };

        let mut kanban = Self {
            store,
            ids,
            boards,
            selected: None,
            open: None,
        };
        if let Some(id) = selected {
            kanban.open_board(id);
        }
        info!("loaded {} boards", kanban.boards.len());
        kanban
    }

    pub fn store(&self) -> &SlotStore<B> {
        &self.store
    }

    // ========================
    // Snapshots
    // ========================

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, id: &Id) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    pub fn selected_board_id(&self) -> Option<&Id> {
        self.selected.as_ref()
    }

    pub fn selected_board(&self) -> Option<&Board> {
        self.selected.as_ref().and_then(|id| self.board(id))
    }

    /// Contents of the selected board, if any
    pub fn contents(&self) -> Option<&BoardContents> {
        self.open.as_ref()
    }

    /// Full column collection of the selected board's slot
    pub fn columns(&self) -> &[Column] {
        self.open.as_ref().map(|c| c.columns.as_slice()).unwrap_or(&[])
    }

    /// Full task collection of the selected board's slot
    pub fn tasks(&self) -> &[Task] {
        self.open.as_ref().map(|c| c.tasks.as_slice()).unwrap_or(&[])
    }

    /// Columns owned by `board_id`, in order
    pub fn columns_of<'a>(&'a self, board_id: &'a Id) -> impl Iterator<Item = &'a Column> + 'a {
        self.columns().iter().filter(move |c| c.belongs_to(board_id))
    }

    /// Tasks in `column_id`, in order
    pub fn tasks_of<'a>(&'a self, column_id: &'a Id) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks().iter().filter(move |t| &t.column_id == column_id)
    }

    /// Tasks whose column is not part of the selected board
    pub fn orphaned_tasks(&self) -> Vec<&Task> {
        match &self.open {
            Some(open) => open.tasks.iter().filter(|t| !open.has_column(&t.column_id)).collect(),
            None => Vec::new(),
        }
    }

    // ========================
    // Selection
    // ========================

    /// Select an existing board and load its contents
    ///
    /// Returns `false` for unknown or already selected ids.
    pub fn select_board(&mut self, id: &Id) -> StoreResult<bool> {
        if self.board(id).is_none() || self.selected.as_ref() == Some(id) {
            return Ok(false);
        }
        self.open_board(id.clone());
        self.save_selection()?;
        Ok(true)
    }

    /// Deselect, showing no board
    pub fn clear_selection(&mut self) -> StoreResult<bool> {
        if self.selected.is_none() {
            return Ok(false);
        }
        self.selected = None;
        self.open = None;
        self.save_selection()?;
        Ok(true)
    }

    fn open_board(&mut self, id: Id) {
        let columns: Vec<Column> = self.store.load_vec(&SlotKey::Columns(id.clone()));
        let tasks: Vec<Task> = self.store.load_vec(&SlotKey::Tasks(id.clone()));
        self.ids.observe_all(columns.iter().map(|c| &c.id));
        self.ids.observe_all(tasks.iter().map(|t| &t.id));

        let contents = BoardContents { board_id: id.clone(), columns, tasks };
        let orphans = contents.tasks.iter().filter(|t| !contents.has_column(&t.column_id)).count();
        if orphans > 0 {
            debug!("board {} has {} tasks without a column", id, orphans);
        }
        debug!(
            "opened board {}: {} columns, {} tasks",
            id,
            contents.columns.len(),
            contents.tasks.len()
        );
        self.selected = Some(id);
        self.open = Some(contents);
    }

    fn save_selection(&self) -> StoreResult<()> {
        self.store.save(&SlotKey::SelectedBoard, &self.selected)
    }

    // ========================
    // Boards
    // ========================

    /// Append a board titled "Board N"
    pub fn create_board(&mut self) -> StoreResult<Board> {
        let board = Board::new(self.ids.next_id(), Board::default_title(self.boards.len() + 1));
        self.boards = self.boards.iter().cloned().chain(Some(board.clone())).collect();
        info!("created board {}", board.id);
        self.save_boards()?;
        Ok(board)
    }

    pub fn rename_board(&mut self, id: &Id, title: &str) -> StoreResult<bool> {
        if self.board(id).is_none() {
            return Ok(false);
        }
        self.boards = self
            .boards
            .iter()
            .map(|b| if &b.id == id { Board::new(id.clone(), title) } else { b.clone() })
            .collect();
        self.save_boards()?;
        Ok(true)
    }

    /// Delete a board together with its column and task slots
    ///
    /// When the selected board goes away the first remaining board is
    /// selected instead.
    pub fn delete_board(&mut self, id: &Id) -> StoreResult<bool> {
        if self.board(id).is_none() {
            return Ok(false);
        }
        self.boards = self.boards.iter().filter(|b| &b.id != id).cloned().collect();

        let was_selected = self.selected.as_ref() == Some(id);
        if was_selected {
            self.selected = None;
            self.open = None;
            if let Some(first) = self.boards.first().map(|b| b.id.clone()) {
                self.open_board(first);
            }
        }
        info!("deleted board {}", id);

        self.save_boards()?;
        self.store.clear(&SlotKey::Columns(id.clone()))?;
        self.store.clear(&SlotKey::Tasks(id.clone()))?;
        if was_selected {
            self.save_selection()?;
        }
        Ok(true)
    }

    /// Move `dragged` to the sidebar position held by `target`
    pub fn reorder_boards(&mut self, dragged: &Id, target: &Id) -> StoreResult<bool> {
        match reorder::reorder_by_id(&self.boards, dragged, target) {
            Some(boards) => {
                self.boards = boards;
                self.save_boards()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn save_boards(&self) -> StoreResult<()> {
        self.store.save(&SlotKey::Boards, &self.boards)
    }

    // ========================
    // Columns
    // ========================

    /// Append a column titled "Column N" to the selected board
    ///
    /// `None` when no board is selected.
    pub fn create_column(&mut self) -> StoreResult<Option<Column>> {
        let Some(open) = &self.open else {
            return Ok(None);
        };
        let board_id = open.board_id.clone();
        let ordinal = open.columns.iter().filter(|c| c.belongs_to(&board_id)).count() + 1;
        let column = Column::new(&board_id, self.ids.next_id(), Column::default_title(ordinal));
        debug!("created column {}", column.id);

        let columns = self.columns().iter().cloned().chain(Some(column.clone())).collect();
        self.replace_columns(columns)?;
        Ok(Some(column))
    }

    pub fn rename_column(&mut self, id: &Id, title: &str) -> StoreResult<bool> {
        if index_of(self.columns(), id).is_none() {
            return Ok(false);
        }
        let columns = self
            .columns()
            .iter()
            .map(|c| {
                if &c.id == id {
                    Column { title: title.to_string(), ..c.clone() }
                } else {
                    c.clone()
                }
            })
            .collect();
        self.replace_columns(columns)?;
        Ok(true)
    }

    /// Delete a column and every task in it
    pub fn delete_column(&mut self, id: &Id) -> StoreResult<bool> {
        if index_of(self.columns(), id).is_none() {
            return Ok(false);
        }
        let columns = self.columns().iter().filter(|c| &c.id != id).cloned().collect();
        let tasks: Vec<Task> = self.tasks().iter().filter(|t| &t.column_id != id).cloned().collect();
        let removed = self.tasks().len() - tasks.len();
        debug!("deleted column {} with {} tasks", id, removed);

        self.replace_columns(columns)?;
        self.replace_tasks(tasks)?;
        Ok(true)
    }

    fn replace_columns(&mut self, columns: Vec<Column>) -> StoreResult<()> {
        let Some(open) = self.open.as_mut() else {
            return Ok(());
        };
        open.columns = columns;
        self.store.save(&SlotKey::Columns(open.board_id.clone()), &open.columns)
    }

    // ========================
    // Tasks
    // ========================

    /// Append a task to `column_id`
    ///
    /// `None` when the column is not part of the selected board.
    pub fn create_task(&mut self, column_id: &Id) -> StoreResult<Option<Task>> {
        match &self.open {
            Some(open) if open.has_column(column_id) => {}
            _ => return Ok(None),
        }
        let task = Task::new(self.ids.next_id(), column_id.clone(), DEFAULT_TASK_CONTENT);
        debug!("created task {} in {}", task.id, column_id);

        let tasks = self.tasks().iter().cloned().chain(Some(task.clone())).collect();
        self.replace_tasks(tasks)?;
        Ok(Some(task))
    }

    pub fn update_task(&mut self, id: &Id, content: &str) -> StoreResult<bool> {
        if index_of(self.tasks(), id).is_none() {
            return Ok(false);
        }
        let tasks = self
            .tasks()
            .iter()
            .map(|t| {
                if &t.id == id {
                    Task { content: content.to_string(), ..t.clone() }
                } else {
                    t.clone()
                }
            })
            .collect();
        self.replace_tasks(tasks)?;
        Ok(true)
    }

    pub fn delete_task(&mut self, id: &Id) -> StoreResult<bool> {
        if index_of(self.tasks(), id).is_none() {
            return Ok(false);
        }
        let tasks = self.tasks().iter().filter(|t| &t.id != id).cloned().collect();
        self.replace_tasks(tasks)?;
        Ok(true)
    }

    fn replace_tasks(&mut self, tasks: Vec<Task>) -> StoreResult<()> {
        let Some(open) = self.open.as_mut() else {
            return Ok(());
        };
        open.tasks = tasks;
        self.store.save(&SlotKey::Tasks(open.board_id.clone()), &open.tasks)
    }

    // ========================
    // Drag and drop
    // ========================

    /// Apply one step of a column or task drag on the selected board
    ///
    /// Returns whether anything moved; nothing is written otherwise.
    pub fn apply_drag(&mut self, dragged: &DragItem, target: &DragItem, phase: DragPhase) -> StoreResult<bool> {
        let Some(open) = &self.open else {
            return Ok(false);
        };
        match reorder::apply_drag(&open.columns, &open.tasks, dragged, target, phase) {
            Some(Reordered::Columns(columns)) => {
                debug!("moved column {} over {:?}", dragged.id(), target);
                self.replace_columns(columns)?;
                Ok(true)
            }
            Some(Reordered::Tasks(tasks)) => {
                debug!("moved task {} over {:?}", dragged.id(), target);
                self.replace_tasks(tasks)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn fresh() -> Kanban<MemoryStorage> {
        Kanban::load(MemoryStorage::new())
    }

    #[test]
    fn test_first_ids_follow_creation_order() {
        let mut kanban = fresh();
        let board = kanban.create_board().unwrap();
        kanban.select_board(&board.id).unwrap();
        let column = kanban.create_column().unwrap().unwrap();
        let task = kanban.create_task(&column.id).unwrap().unwrap();

        assert_eq!(board.id, Id::Num(1));
        assert_eq!(board.title, "Board 1");
        assert_eq!(column.id, Id::from("1-2"));
        assert_eq!(column.title, "Column 1");
        assert_eq!(task.id, Id::Num(3));
        assert_eq!(task.column_id, column.id);
        assert_eq!(task.content, DEFAULT_TASK_CONTENT);
    }

    #[test]
    fn test_column_needs_selected_board() {
        let mut kanban = fresh();
        kanban.create_board().unwrap();
        assert_eq!(kanban.create_column().unwrap(), None);
    }

    #[test]
    fn test_task_needs_existing_column() {
        let mut kanban = fresh();
        let board = kanban.create_board().unwrap();
        kanban.select_board(&board.id).unwrap();
        assert_eq!(kanban.create_task(&Id::from("1-404")).unwrap(), None);
        assert!(kanban.tasks().is_empty());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut kanban = fresh();
        let board = kanban.create_board().unwrap();
        kanban.select_board(&board.id).unwrap();
        let before = kanban.store().backend().keys();

        assert!(!kanban.rename_board(&Id::Num(99), "x").unwrap());
        assert!(!kanban.delete_board(&Id::Num(99)).unwrap());
        assert!(!kanban.rename_column(&Id::from("1-99"), "x").unwrap());
        assert!(!kanban.delete_column(&Id::from("1-99")).unwrap());
        assert!(!kanban.update_task(&Id::Num(99), "x").unwrap());
        assert!(!kanban.delete_task(&Id::Num(99)).unwrap());
        assert!(!kanban.select_board(&Id::Num(99)).unwrap());

        assert_eq!(kanban.boards().len(), 1);
        assert_eq!(kanban.store().backend().keys(), before);
    }

    #[test]
    fn test_column_title_counts_board_columns() {
        let mut kanban = fresh();
        let board = kanban.create_board().unwrap();
        kanban.select_board(&board.id).unwrap();
        kanban.create_column().unwrap();
        let second = kanban.create_column().unwrap().unwrap();
        assert_eq!(second.title, "Column 2");
    }

    #[test]
    fn test_delete_column_cascades_to_its_tasks() {
        let mut kanban = fresh();
        let board = kanban.create_board().unwrap();
        kanban.select_board(&board.id).unwrap();
        let keep = kanban.create_column().unwrap().unwrap();
        let gone = kanban.create_column().unwrap().unwrap();
        let kept_task = kanban.create_task(&keep.id).unwrap().unwrap();
        kanban.create_task(&gone.id).unwrap();
        kanban.create_task(&gone.id).unwrap();

        assert!(kanban.delete_column(&gone.id).unwrap());
        assert_eq!(kanban.columns(), &[keep]);
        assert_eq!(kanban.tasks(), &[kept_task]);
    }

    #[test]
    fn test_failed_write_keeps_memory_change() {
        let mut kanban = Kanban::load(MemoryStorage::read_only());
        assert!(kanban.create_board().is_err());
        assert_eq!(kanban.boards().len(), 1);
    }

    #[test]
    fn test_orphaned_tasks_are_hidden() {
        let backend = MemoryStorage::new();
        backend.seed("kanban_boards", r#"[{"id":1,"title":"Board 1"}]"#);
        backend.seed("selected_boardId", "1");
        backend.seed("columns_1", r#"[{"id":"1-2","title":"Todo"}]"#);
        backend.seed(
            "tasks_1",
            r#"[{"id":3,"columnId":"1-2","content":"a"},{"id":4,"columnId":"1-9","content":"b"}]"#,
        );
        let kanban = Kanban::load(backend);

        let column = Id::from("1-2");
        assert_eq!(kanban.tasks_of(&column).count(), 1);
        assert_eq!(kanban.orphaned_tasks().len(), 1);
        assert_eq!(kanban.tasks().len(), 2);
    }
}
