//! The board controller.
//!
//! [`BoardController`] owns the board and the two single-slot overlays (the
//! task being edited and the task pending deletion). Every mutation goes
//! through one of its methods, and rendering layers learn about effective
//! changes by subscribing to [`BoardEvent`]s.

use std::fmt;

use chrono::Utc;
use tracing::{debug, warn};

use crate::board::{Board, Position};
use crate::drag::{DragGestureProvider, DropEvent};
use crate::error::Result;
use crate::id::{IdGenerator, TaskId};
use crate::task::{EditField, Status, Task};

/// A staged deletion awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    /// Column the task is expected to be in.
    pub column: Status,
    /// The task to delete.
    pub id: TaskId,
}

/// An effective change made by the controller.
///
/// Operations that turn out to be no-ops emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// A task was appended to the pending column.
    TaskAdded {
        /// The new task.
        id: TaskId,
    },
    /// A task was dropped somewhere else.
    TaskMoved {
        /// The moved task.
        id: TaskId,
        /// Where it was.
        from: Position,
        /// Where it is now.
        to: Position,
    },
    /// A working copy was staged for editing.
    EditStarted {
        /// The task being edited.
        id: TaskId,
    },
    /// The working copy was changed.
    EditUpdated {
        /// The task being edited.
        id: TaskId,
    },
    /// The working copy replaced the original.
    EditCommitted {
        /// The edited task.
        id: TaskId,
    },
    /// The working copy was thrown away.
    EditCancelled {
        /// The task that was being edited.
        id: TaskId,
    },
    /// A deletion was staged for confirmation.
    DeleteRequested {
        /// Column the task is expected to be in.
        column: Status,
        /// The task to delete.
        id: TaskId,
    },
    /// A task was removed.
    TaskDeleted {
        /// Column it was removed from.
        column: Status,
        /// The removed task.
        id: TaskId,
    },
    /// The staged deletion was dropped.
    DeleteCancelled {
        /// Column of the spared task.
        column: Status,
        /// The spared task.
        id: TaskId,
    },
}

/// Handle returned by [`BoardController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked after every effective mutation.
pub type Observer = Box<dyn FnMut(&BoardEvent)>;

/// Everything a rendering layer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// The committed board.
    pub board: &'a Board,
    /// The staged working copy, if the edit modal is open.
    pub editing: Option<&'a Task>,
    /// The staged deletion, if the confirmation modal is open.
    pub pending_delete: Option<&'a PendingDelete>,
}

/// Framework-agnostic state container for the kanban board.
///
/// # Examples
///
/// ```
/// use tareas_board::{BoardController, EditField, Priority, Status};
///
/// let mut controller = BoardController::new();
/// let id = controller.add_task("Buy milk").unwrap();
///
/// let task = controller.board().get_task(id).unwrap().clone();
/// controller.begin_edit(&task);
/// controller.update_edit_field(EditField::Priority(Priority::High));
/// assert!(controller.commit_edit());
///
/// let task = controller.board().get_task(id).unwrap();
/// assert_eq!(task.priority, Priority::High);
/// assert_eq!(task.status, Status::Pending);
///
/// controller.request_delete(Status::Pending, id);
/// assert!(controller.confirm_delete().is_some());
/// assert!(controller.board().column(Status::Pending).is_empty());
/// ```
pub struct BoardController {
    board: Board,
    ids: IdGenerator,
    editing: Option<Task>,
    pending_delete: Option<PendingDelete>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for BoardController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardController")
            .field("board", &self.board)
            .field("editing", &self.editing)
            .field("pending_delete", &self.pending_delete)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardController {
    /// Creates a controller over an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), IdGenerator::new())
    }

    /// Creates a controller over an existing board.
    ///
    /// The generator is advanced past every ID already on the board so new
    /// tasks cannot collide with them.
    #[must_use]
    pub fn with_board(board: Board, mut ids: IdGenerator) -> Self {
        for task in board.tasks() {
            ids.observe(task.id);
        }
        Self {
            board,
            ids,
            editing: None,
            pending_delete: None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the committed board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the staged working copy, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    /// Returns the staged deletion, if any.
    #[must_use]
    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    /// Returns the snapshot a rendering layer draws from.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView {
            board: &self.board,
            editing: self.editing.as_ref(),
            pending_delete: self.pending_delete.as_ref(),
        }
    }

    /// Registers an observer and returns a handle for removing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::mpsc;
    ///
    /// use tareas_board::{BoardController, BoardEvent};
    ///
    /// let (tx, rx) = mpsc::channel();
    /// let mut controller = BoardController::new();
    /// controller.subscribe(Box::new(move |event: &BoardEvent| {
    ///     let _ = tx.send(*event);
    /// }));
    ///
    /// let id = controller.add_task("Water plants").unwrap();
    /// assert_eq!(rx.try_recv().unwrap(), BoardEvent::TaskAdded { id });
    /// ```
    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() < before
    }

    fn notify(&mut self, event: BoardEvent) {
        debug!(?event, "board changed");
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }

    /// Appends a new pending task and returns its ID.
    ///
    /// Blank input (empty or whitespace only) is ignored and returns `None`.
    /// Otherwise the text is stored exactly as typed.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.ids.next_id();
        self.board.push(Task::new(id, text));
        self.notify(BoardEvent::TaskAdded { id });
        Some(id)
    }

    /// Moves the task at `from[from_index]` to `to[to_index]`.
    ///
    /// The destination index is clamped to the valid insertion range. Moving
    /// onto the same slot, or from an empty slot, does nothing and returns
    /// `false`.
    pub fn move_task(
        &mut self,
        from: Status,
        from_index: usize,
        to: Status,
        to_index: usize,
    ) -> bool {
        let Some(moved) = self.board.move_task(
            Position::new(from, from_index),
            Position::new(to, to_index),
        ) else {
            return false;
        };

        self.notify(BoardEvent::TaskMoved {
            id: moved.id,
            from: moved.from,
            to: moved.to,
        });
        true
    }

    /// Applies a completed drag.
    ///
    /// A drop released outside every column changes nothing.
    pub fn handle_drop(&mut self, drop: DropEvent) -> bool {
        let Some(destination) = drop.destination else {
            debug!(source = ?drop.source, "drop outside the board ignored");
            return false;
        };
        self.move_task(
            drop.source.column,
            drop.source.index,
            destination.column,
            destination.index,
        )
    }

    /// Feeds a gesture to a drag provider and applies the drop it completes.
    ///
    /// Returns `true` only if the board changed.
    pub fn drive<P: DragGestureProvider>(&mut self, provider: &mut P, gesture: P::Gesture) -> bool {
        provider
            .interpret(gesture)
            .is_some_and(|drop| self.handle_drop(drop))
    }

    /// Stages a working copy of `task` for editing, replacing any previous
    /// copy.
    pub fn begin_edit(&mut self, task: &Task) {
        let id = task.id;
        self.editing = Some(task.clone());
        self.notify(BoardEvent::EditStarted { id });
    }

    /// Changes one field of the staged copy. The board is not touched.
    ///
    /// Returns `false` when nothing is staged.
    pub fn update_edit_field(&mut self, field: EditField) -> bool {
        let Some(staged) = self.editing.as_mut() else {
            return false;
        };
        staged.apply(field);
        let id = staged.id;
        self.notify(BoardEvent::EditUpdated { id });
        true
    }

    /// Parses and applies a `(field, value)` pair to the staged copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the field or value cannot be parsed; the staged
    /// copy is left unchanged in that case.
    pub fn update_edit_field_str(&mut self, field: &str, value: &str) -> Result<bool> {
        let field = EditField::parse(field, value)?;
        Ok(self.update_edit_field(field))
    }

    /// Replaces the original task with the staged copy and closes the edit.
    ///
    /// The original is looked up by ID in the column of the staged copy's
    /// status. Returns `false` when nothing was staged or the original is no
    /// longer there; the edit is closed either way.
    pub fn commit_edit(&mut self) -> bool {
        let Some(mut staged) = self.editing.take() else {
            return false;
        };

        let id = staged.id;
        let Some(original) = self.board.column_mut(staged.status).get_task_mut(id) else {
            warn!(%id, status = staged.status.as_str(), "edited task no longer in its column");
            return false;
        };

        staged.updated_at = Utc::now();
        *original = staged;
        self.notify(BoardEvent::EditCommitted { id });
        true
    }

    /// Discards the staged copy. Returns `false` when nothing was staged.
    pub fn cancel_edit(&mut self) -> bool {
        let Some(staged) = self.editing.take() else {
            return false;
        };
        self.notify(BoardEvent::EditCancelled { id: staged.id });
        true
    }

    /// Stages a deletion for confirmation, replacing any previous one.
    pub fn request_delete(&mut self, column: Status, id: TaskId) {
        self.pending_delete = Some(PendingDelete { column, id });
        self.notify(BoardEvent::DeleteRequested { column, id });
    }

    /// Removes the staged task and closes the confirmation.
    ///
    /// Returns the removed task, or `None` when nothing was staged or the
    /// task is no longer in the staged column.
    pub fn confirm_delete(&mut self) -> Option<Task> {
        let PendingDelete { column, id } = self.pending_delete.take()?;
        let removed = self.board.remove_from(column, id);
        match removed {
            Some(_) => self.notify(BoardEvent::TaskDeleted { column, id }),
            None => warn!(%id, column = column.as_str(), "task to delete not found"),
        }
        removed
    }

    /// Drops the staged deletion. Returns `false` when nothing was staged.
    pub fn cancel_delete(&mut self) -> bool {
        let Some(PendingDelete { column, id }) = self.pending_delete.take() else {
            return false;
        };
        self.notify(BoardEvent::DeleteCancelled { column, id });
        true
    }
}
