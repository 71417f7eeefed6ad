//! Reorder Engine
//!
//! Pure functions from a collection and a drag gesture to the next
//! collection. Index math always runs against the full, unfiltered
//! collection so other boards' entries keep their places.

use crate::domain::{index_of, Column, Entity, Id, Task};

/// Something that can be dragged, or dropped onto
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragItem {
    Column(Id),
    Task(Id),
}

impl DragItem {
    pub fn id(&self) -> &Id {
        match self {
            DragItem::Column(id) | DragItem::Task(id) => id,
        }
    }
}

/// When during a gesture an update is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// The pointer moved over a new target while dragging
    Over,
    /// The pointer was released over a target
    End,
}

/// Move the element at `from` to `to`, shifting the ones in between
///
/// Out-of-range indices leave the slice unchanged.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next = items.to_vec();
    if from >= next.len() || to >= next.len() || from == to {
        return next;
    }
    let item = next.remove(from);
    next.insert(to, item);
    next
}

/// Move `dragged` to the index currently held by `target`
///
/// `None` when the ids are equal or either one is missing.
pub fn reorder_by_id<T: Entity>(items: &[T], dragged: &Id, target: &Id) -> Option<Vec<T>> {
    if dragged == target {
        return None;
    }
    let from = index_of(items, dragged)?;
    let to = index_of(items, target)?;
    Some(move_item(items, from, to))
}

/// Column dropped onto another column
pub fn reorder_columns(columns: &[Column], dragged: &Id, target: &Id) -> Option<Vec<Column>> {
    reorder_by_id(columns, dragged, target)
}

/// Task dragged over another task: join its column, take its index
pub fn move_task_over_task(tasks: &[Task], dragged: &Id, target: &Id) -> Option<Vec<Task>> {
    if dragged == target {
        return None;
    }
    let from = index_of(tasks, dragged)?;
    let to = index_of(tasks, target)?;
    let column_id = &tasks[to].column_id;
    let mut next = tasks.to_vec();
    next[from] = tasks[from].reparented(column_id);
    Some(move_item(&next, from, to))
}

/// Task dragged over a column body: join the column, keep its index
pub fn move_task_to_column(tasks: &[Task], dragged: &Id, column: &Id) -> Option<Vec<Task>> {
    let from = index_of(tasks, dragged)?;
    if tasks[from].column_id == *column {
        return None;
    }
    let next = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| if i == from { task.reparented(column) } else { task.clone() })
        .collect();
    Some(next)
}

/// Result of applying one gesture step to a board's contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reordered {
    Columns(Vec<Column>),
    Tasks(Vec<Task>),
}

/// Apply a gesture step to the full column and task collections
///
/// Columns move on release, tasks move while hovering. `None` means the
/// step changes nothing.
pub fn apply_drag(
    columns: &[Column],
    tasks: &[Task],
    dragged: &DragItem,
    target: &DragItem,
    phase: DragPhase,
) -> Option<Reordered> {
    match (dragged, target, phase) {
        (DragItem::Column(dragged), DragItem::Column(target), DragPhase::End) => {
            reorder_columns(columns, dragged, target).map(Reordered::Columns)
        }
        (DragItem::Column(dragged), DragItem::Task(target), DragPhase::End) => {
            let owner = tasks.iter().find(|t| &t.id == target)?.column_id.clone();
            reorder_columns(columns, dragged, &owner).map(Reordered::Columns)
        }
        (DragItem::Column(_), _, DragPhase::Over) => None,
        (DragItem::Task(dragged), DragItem::Task(target), DragPhase::Over) => {
            move_task_over_task(tasks, dragged, target).map(Reordered::Tasks)
        }
        (DragItem::Task(dragged), DragItem::Column(column), DragPhase::Over) => {
            index_of(columns, column)?;
            move_task_to_column(tasks, dragged, column).map(Reordered::Tasks)
        }
        (DragItem::Task(_), _, DragPhase::End) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn col(board: u32, n: u32) -> Column {
        Column::new(&Id::Num(board), n, format!("Column {}", n))
    }

    fn task(id: u32, column: &Column) -> Task {
        Task::new(id, column.id.clone(), format!("task {}", id))
    }

    fn ids<T: Entity>(items: &[T]) -> Vec<Id> {
        items.iter().map(|i| i.id().clone()).collect()
    }

    #[test]
    fn test_move_item_forward_and_back() {
        assert_eq!(move_item(&[1, 2, 3, 4], 0, 2), vec![2, 3, 1, 4]);
        assert_eq!(move_item(&[1, 2, 3, 4], 3, 1), vec![1, 4, 2, 3]);
        assert_eq!(move_item(&[1, 2, 3], 1, 1), vec![1, 2, 3]);
        assert_eq!(move_item(&[1, 2, 3], 5, 0), vec![1, 2, 3]);
    }

    #[test]
    fn test_two_columns_swap_then_self_drop() {
        let (a, b) = (col(1, 10), col(1, 11));
        let columns = vec![a.clone(), b.clone()];

        let moved = reorder_columns(&columns, &a.id, &b.id).unwrap();
        assert_eq!(ids(&moved), vec![b.id.clone(), a.id.clone()]);

        assert!(reorder_columns(&moved, &b.id, &b.id).is_none());
    }

    #[test]
    fn test_column_reorder_leaves_other_boards_in_place() {
        let other = col(2, 20);
        let (a, b, c) = (col(1, 10), col(1, 11), col(1, 12));
        let columns = vec![a.clone(), other.clone(), b.clone(), c.clone()];

        let moved = reorder_columns(&columns, &c.id, &a.id).unwrap();
        assert_eq!(ids(&moved), vec![c.id, a.id, other.id, b.id]);
    }

    #[test]
    fn test_task_over_task_in_other_column() {
        let (c1, c2) = (col(1, 1), col(1, 2));
        let t1 = task(10, &c1);
        let t2 = task(11, &c2);
        let t3 = task(12, &c2);
        let tasks = vec![t1.clone(), t2.clone(), t3.clone()];

        let moved = move_task_over_task(&tasks, &t1.id, &t2.id).unwrap();
        assert_eq!(ids(&moved), vec![t2.id.clone(), t1.id.clone(), t3.id.clone()]);
        assert_eq!(moved[1].column_id, c2.id);
        // The input is not touched
        assert_eq!(tasks[0].column_id, c1.id);
    }

    #[test]
    fn test_task_over_self_is_noop() {
        let c1 = col(1, 1);
        let t1 = task(10, &c1);
        assert!(move_task_over_task(&[t1.clone()], &t1.id, &t1.id).is_none());
    }

    #[test]
    fn test_task_to_column_keeps_position() {
        let (c1, c2) = (col(1, 1), col(1, 2));
        let tasks = vec![task(10, &c1), task(11, &c1), task(12, &c1)];

        let moved = move_task_to_column(&tasks, &Id::Num(11), &c2.id).unwrap();
        assert_eq!(ids(&moved), ids(&tasks));
        assert_eq!(moved[1].column_id, c2.id);
        assert_eq!(moved[1].content, tasks[1].content);
        assert!(move_task_to_column(&moved, &Id::Num(11), &c2.id).is_none());
    }

    #[test]
    fn test_apply_drag_phases() {
        let (c1, c2) = (col(1, 1), col(1, 2));
        let columns = vec![c1.clone(), c2.clone()];
        let tasks = vec![task(10, &c1), task(11, &c2)];
        let dragged_col = DragItem::Column(c1.id.clone());

        // Columns ignore hover and move on release
        assert!(apply_drag(&columns, &tasks, &dragged_col, &DragItem::Column(c2.id.clone()), DragPhase::Over).is_none());
        let end = apply_drag(&columns, &tasks, &dragged_col, &DragItem::Column(c2.id.clone()), DragPhase::End);
        assert_eq!(end, Some(Reordered::Columns(vec![c2.clone(), c1.clone()])));

        // Column released over a task uses the task's column
        let over_task = apply_drag(&columns, &tasks, &dragged_col, &DragItem::Task(Id::Num(11)), DragPhase::End);
        assert_eq!(over_task, Some(Reordered::Columns(vec![c2.clone(), c1.clone()])));

        // Tasks move while hovering and do nothing on release
        let dragged_task = DragItem::Task(Id::Num(10));
        assert!(apply_drag(&columns, &tasks, &dragged_task, &DragItem::Task(Id::Num(11)), DragPhase::End).is_none());
        assert!(matches!(
            apply_drag(&columns, &tasks, &dragged_task, &DragItem::Column(c2.id.clone()), DragPhase::Over),
            Some(Reordered::Tasks(_))
        ));
    }

    #[test]
    fn test_apply_drag_unknown_target_aborts() {
        let c1 = col(1, 1);
        let columns = vec![c1.clone()];
        let tasks = vec![task(10, &c1)];
        let missing = DragItem::Column(Id::from("1-99"));
        assert!(apply_drag(&columns, &tasks, &DragItem::Task(Id::Num(10)), &missing, DragPhase::Over).is_none());
        assert!(apply_drag(&columns, &tasks, &DragItem::Column(c1.id.clone()), &missing, DragPhase::End).is_none());
    }

    proptest! {
        #[test]
        fn prop_move_item_is_a_rotation(len in 1usize..40, a in 0usize..40, b in 0usize..40) {
            let items: Vec<usize> = (0..len).collect();
            let (from, to) = (a % len, b % len);
            let moved = move_item(&items, from, to);

            prop_assert_eq!(moved.len(), items.len());
            let mut sorted = moved.clone();
            sorted.sort();
            prop_assert_eq!(&sorted, &items);
            prop_assert_eq!(moved[to], items[from]);
            if from == to {
                prop_assert_eq!(moved, items);
            }
        }

        #[test]
        fn prop_reparent_changes_only_column(n in 1u32..20, pick in 0u32..20) {
            let (c1, c2) = (col(1, 1), col(1, 2));
            let tasks: Vec<Task> = (0..n).map(|i| task(100 + i, &c1)).collect();
            let dragged = Id::Num(100 + pick % n);

            let moved = move_task_to_column(&tasks, &dragged, &c2.id).unwrap();
            prop_assert_eq!(ids(&moved), ids(&tasks));
            for (before, after) in tasks.iter().zip(&moved) {
                prop_assert_eq!(&before.content, &after.content);
                if before.id == dragged {
                    prop_assert_eq!(&after.column_id, &c2.id);
                } else {
                    prop_assert_eq!(&after.column_id, &before.column_id);
                }
            }
        }
    }
}
