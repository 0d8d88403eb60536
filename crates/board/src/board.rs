//! Board layout types.
//!
//! This module defines the columns of the board and the board itself,
//! together with the splice logic used when a card is dropped.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::id::TaskId;
use crate::task::{Status, Task};

/// A slot on the board: a column and an index within it.
///
/// # Examples
///
/// ```
/// use tareas_board::{Position, Status};
///
/// let pos = Position::new(Status::InProgress, 2);
/// assert_eq!(pos.column, Status::InProgress);
/// assert_eq!(pos.index, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// The column.
    pub column: Status,
    /// The index within the column.
    pub index: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(column: Status, index: usize) -> Self {
        Self { column, index }
    }
}

/// The outcome of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moved {
    /// The task that moved.
    pub id: TaskId,
    /// Where it was taken from.
    pub from: Position,
    /// Where it was inserted, after clamping.
    pub to: Position,
}

/// A single column of the board.
///
/// # Examples
///
/// ```
/// use tareas_board::{Column, Status};
///
/// let column = Column::new(Status::Processed);
/// assert!(column.is_empty());
/// assert_eq!(column.status, Status::Processed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// The status every task in this column carries.
    pub status: Status,
    /// Tasks in on-screen order.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates a new empty column.
    #[must_use]
    pub const fn new(status: Status) -> Self {
        Self {
            status,
            tasks: Vec::new(),
        }
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the index of a task by ID, if present.
    #[must_use]
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Returns a reference to a task by ID, if present.
    #[must_use]
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns a mutable reference to a task by ID, if present.
    #[must_use]
    pub fn get_task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Removes and returns a task by ID, if present.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.position_of(id)?;
        Some(self.tasks.remove(pos))
    }
}

/// A board with three fixed columns.
///
/// Columns are indexed by [`Status::index`]. Every task sits in the column
/// matching its `status`, and no ID appears twice.
///
/// # Examples
///
/// ```
/// use tareas_board::{Board, Status, Task, TaskId};
///
/// let mut board = Board::new();
/// board.push(Task::new(TaskId::from_raw(1), "Buy milk"));
///
/// assert_eq!(board.column(Status::Pending).len(), 1);
/// assert!(board.is_consistent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// The three columns, indexed by [`Status::index`].
    pub columns: [Column; 3],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: [
                Column::new(Status::Pending),
                Column::new(Status::InProgress),
                Column::new(Status::Processed),
            ],
        }
    }

    /// Returns the column for a status.
    #[must_use]
    pub fn column(&self, status: Status) -> &Column {
        &self.columns[status.index()]
    }

    /// Returns the column for a status, mutably.
    #[must_use]
    pub fn column_mut(&mut self, status: Status) -> &mut Column {
        &mut self.columns[status.index()]
    }

    /// Appends a task to the tail of the column matching its status.
    pub fn push(&mut self, task: Task) {
        let status = task.status;
        self.column_mut(status).tasks.push(task);
    }

    /// Finds a task by ID across all columns.
    #[must_use]
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.columns.iter().find_map(|column| column.get_task(id))
    }

    /// Returns the task at a position, if any.
    #[must_use]
    pub fn task_at(&self, position: Position) -> Option<&Task> {
        self.column(position.column).tasks.get(position.index)
    }

    /// Locates a task by ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas_board::{Board, Position, Status, Task, TaskId};
    ///
    /// let mut board = Board::new();
    /// board.push(Task::new(TaskId::from_raw(1), "First"));
    /// board.push(Task::new(TaskId::from_raw(2), "Second"));
    ///
    /// assert_eq!(
    ///     board.locate(TaskId::from_raw(2)),
    ///     Some(Position::new(Status::Pending, 1))
    /// );
    /// ```
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<Position> {
        self.columns.iter().find_map(|column| {
            column
                .position_of(id)
                .map(|index| Position::new(column.status, index))
        })
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Moves the task at `from` so that it ends up at `to`.
    ///
    /// The task is removed from its column first, then inserted at
    /// `to.index` clamped to the last valid slot, shifting later tasks down.
    /// Moving across columns updates the task's status.
    ///
    /// Returns `None` without touching the board when `from` does not hold
    /// a task or when the clamped destination is the slot it already holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas_board::{Board, Position, Status, Task, TaskId};
    ///
    /// let mut board = Board::new();
    /// board.push(Task::new(TaskId::from_raw(1), "First"));
    /// board.push(Task::new(TaskId::from_raw(2), "Second"));
    ///
    /// let moved = board
    ///     .move_task(
    ///         Position::new(Status::Pending, 1),
    ///         Position::new(Status::InProgress, 10),
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(moved.to, Position::new(Status::InProgress, 0));
    /// let task = board.get_task(TaskId::from_raw(2)).unwrap();
    /// assert_eq!(task.status, Status::InProgress);
    /// ```
    pub fn move_task(&mut self, from: Position, to: Position) -> Option<Moved> {
        let source_len = self.column(from.column).len();
        if from.index >= source_len {
            return None;
        }

        // Within one column the task's own slot is freed first.
        let last_slot = if from.column == to.column {
            source_len - 1
        } else {
            self.column(to.column).len()
        };
        let index = to.index.min(last_slot);
        if from.column == to.column && from.index == index {
            return None;
        }

        let mut task = self.column_mut(from.column).tasks.remove(from.index);
        if from.column != to.column {
            task.move_to(to.column);
        }

        let id = task.id;
        self.column_mut(to.column).tasks.insert(index, task);

        Some(Moved {
            id,
            from,
            to: Position::new(to.column, index),
        })
    }

    /// Removes a task by ID from a specific column.
    pub fn remove_from(&mut self, status: Status, id: TaskId) -> Option<Task> {
        self.column_mut(status).remove_task(id)
    }

    /// Iterates over every task, column by column.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|column| column.tasks.iter())
    }

    /// Checks the board invariant: every task's status matches the column
    /// it sits in, and no ID appears twice.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let statuses_match = self
            .columns
            .iter()
            .all(|column| column.tasks.iter().all(|t| t.status == column.status));

        let mut seen = HashSet::new();
        statuses_match && self.tasks().all(|t| seen.insert(t.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(texts: &[&str]) -> Board {
        let mut board = Board::new();
        for (i, text) in texts.iter().enumerate() {
            board.push(Task::new(TaskId::from_raw(i as u64 + 1), *text));
        }
        board
    }

    fn texts(board: &Board, status: Status) -> Vec<&str> {
        board
            .column(status)
            .tasks
            .iter()
            .map(|t| t.text.as_str())
            .collect()
    }

    #[test]
    fn new_board_has_three_empty_columns() {
        let board = Board::new();
        for (i, column) in board.columns.iter().enumerate() {
            assert_eq!(column.status.index(), i);
            assert!(column.is_empty());
        }
        assert_eq!(board.total_tasks(), 0);
    }

    #[test]
    fn push_appends_to_the_tail() {
        let board = board_with(&["a", "b", "c"]);
        assert_eq!(texts(&board, Status::Pending), vec!["a", "b", "c"]);
    }

    #[test]
    fn move_within_column_reorders() {
        let mut board = board_with(&["a", "b", "c"]);
        let moved = board.move_task(
            Position::new(Status::Pending, 0),
            Position::new(Status::Pending, 2),
        );
        assert!(moved.is_some());
        assert_eq!(texts(&board, Status::Pending), vec!["b", "c", "a"]);
        assert!(board.is_consistent());
    }

    #[test]
    fn move_across_columns_updates_status() {
        let mut board = board_with(&["a", "b"]);
        board.move_task(
            Position::new(Status::Pending, 1),
            Position::new(Status::InProgress, 0),
        );

        assert_eq!(texts(&board, Status::Pending), vec!["a"]);
        assert_eq!(texts(&board, Status::InProgress), vec!["b"]);
        assert_eq!(
            board.column(Status::InProgress).tasks[0].status,
            Status::InProgress
        );
        assert!(board.is_consistent());
    }

    #[test]
    fn move_to_same_slot_is_noop() {
        let mut board = board_with(&["a", "b"]);
        let before = board.clone();
        let moved = board.move_task(
            Position::new(Status::Pending, 1),
            Position::new(Status::Pending, 1),
        );
        assert!(moved.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn move_from_missing_slot_is_noop() {
        let mut board = board_with(&["a"]);
        let before = board.clone();
        let moved = board.move_task(
            Position::new(Status::Pending, 5),
            Position::new(Status::Processed, 0),
        );
        assert!(moved.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn move_clamps_destination_index() {
        let mut board = board_with(&["a", "b", "c"]);
        let moved = board
            .move_task(
                Position::new(Status::Pending, 0),
                Position::new(Status::Pending, 99),
            )
            .expect("task should move");
        assert_eq!(moved.to.index, 2);
        assert_eq!(texts(&board, Status::Pending), vec!["b", "c", "a"]);
    }

    #[test]
    fn clamped_move_back_onto_itself_is_noop() {
        let mut board = board_with(&["a", "b", "c"]);
        let before = board.clone();
        let moved = board.move_task(
            Position::new(Status::Pending, 2),
            Position::new(Status::Pending, 99),
        );
        assert!(moved.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn locate_and_remove() {
        let mut board = board_with(&["a", "b"]);
        let id = TaskId::from_raw(2);
        assert_eq!(board.locate(id), Some(Position::new(Status::Pending, 1)));

        assert!(board.remove_from(Status::Processed, id).is_none());
        assert!(board.remove_from(Status::Pending, id).is_some());
        assert_eq!(board.locate(id), None);
    }

    #[test]
    fn inconsistent_board_is_detected() {
        let mut board = board_with(&["a"]);
        board.columns[0].tasks[0].status = Status::Processed;
        assert!(!board.is_consistent());

        let mut board = board_with(&["a"]);
        let duplicate = board.columns[0].tasks[0].clone();
        board.columns[2].tasks.push(Task {
            status: Status::Processed,
            ..duplicate
        });
        assert!(!board.is_consistent());
    }

    #[test]
    fn board_serialization_roundtrip() {
        let board = board_with(&["a", "b"]);
        let json = serde_json::to_string(&board).expect("serialize");
        let parsed: Board = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(board, parsed);
    }
}
