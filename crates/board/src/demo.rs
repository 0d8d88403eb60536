//! Sample data for demonstration.
//!
//! Seeds a board and a to-do list with a handful of realistic entries so the
//! interface has something to show on first launch.
//!
//! # Examples
//!
//! ```
//! use tareas_board::demo::demo_controller;
//! use tareas_board::Status;
//!
//! let controller = demo_controller();
//! assert_eq!(controller.board().column(Status::Pending).len(), 3);
//! ```

use crate::board::Board;
use crate::controller::BoardController;
use crate::id::IdGenerator;
use crate::task::{Priority, Status, Task};
use crate::todo::TodoList;

/// Builds tasks with a non-default status, priority, or comment.
struct TaskBuilder {
    text: &'static str,
    status: Status,
    priority: Priority,
    comment: Option<&'static str>,
}

impl TaskBuilder {
    fn new(text: &'static str) -> Self {
        Self {
            text,
            status: Status::Pending,
            priority: Priority::Low,
            comment: None,
        }
    }

    fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    fn comment(mut self, comment: &'static str) -> Self {
        self.comment = Some(comment);
        self
    }

    fn build(self, ids: &mut IdGenerator) -> Task {
        let mut task = Task::new(ids.next_id(), self.text);
        task.status = self.status;
        task.priority = self.priority;
        task.comment = self.comment.map(str::to_string);
        task
    }
}

/// Generates a sample board.
///
/// - **Pending**: 3 tasks of mixed priority
/// - **In Progress**: 2 tasks
/// - **Processed**: 1 task
#[must_use]
pub fn demo_board(ids: &mut IdGenerator) -> Board {
    let mut board = Board::new();

    let tasks = [
        TaskBuilder::new("Buy groceries")
            .priority(Priority::Medium)
            .comment("Milk, eggs, bread"),
        TaskBuilder::new("Renew passport").priority(Priority::High),
        TaskBuilder::new("Plan weekend trip"),
        TaskBuilder::new("Write quarterly report")
            .status(Status::InProgress)
            .priority(Priority::High)
            .comment("Numbers from finance due Friday"),
        TaskBuilder::new("Fix leaking tap").status(Status::InProgress),
        TaskBuilder::new("Book dentist appointment")
            .status(Status::Processed)
            .priority(Priority::Medium),
    ];

    for builder in tasks {
        board.push(builder.build(ids));
    }
    board
}

/// Returns a controller over [`demo_board`].
#[must_use]
pub fn demo_controller() -> BoardController {
    let mut ids = IdGenerator::new();
    let board = demo_board(&mut ids);
    BoardController::with_board(board, ids)
}

/// Returns a to-do list with a few entries, one of them done.
#[must_use]
pub fn demo_todo_list() -> TodoList {
    let mut list = TodoList::new();
    let done = list.add("Take out the recycling");
    list.add("Reply to Ana's email");
    list.add("Water the plants");
    if let Some(id) = done {
        list.toggle(id);
    }
    list
}
