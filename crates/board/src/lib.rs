//! Board and to-do list state for the tareas application.
//!
//! This crate holds every piece of state the application mutates and none of
//! the rendering. Rendering layers read snapshots and call the mutation
//! methods; nothing here knows about terminals or pointers.
//!
//! # Overview
//!
//! - [`task`]: statuses, priorities, and the `Task` struct
//! - [`board`]: columns, positions, and the splice logic behind drops
//! - [`controller`]: the `BoardController` state container and its events
//! - [`drag`]: the drag-and-drop contract between gestures and the board
//! - [`todo`]: the basic to-do list
//! - [`id`]: timestamp-derived, collision-free identifiers
//! - [`message`]: TUI event messages
//! - [`error`]: error types for parsing board input
//!
//! # Examples
//!
//! ```
//! use tareas_board::{BoardController, Status};
//!
//! let mut controller = BoardController::new();
//! controller.add_task("Pay rent");
//! controller.add_task("Call mum");
//!
//! // Drag the second card to the top of "In Progress".
//! controller.move_task(Status::Pending, 1, Status::InProgress, 0);
//!
//! let in_progress = &controller.board().column(Status::InProgress).tasks;
//! assert_eq!(in_progress[0].text, "Call mum");
//! assert_eq!(in_progress[0].status, Status::InProgress);
//! ```

pub mod board;
pub mod controller;
pub mod demo;
pub mod drag;
pub mod error;
pub mod id;
pub mod message;
pub mod task;
pub mod todo;

// Re-export primary types at crate root for convenience
pub use board::{Board, Column, Moved, Position};
pub use controller::{BoardController, BoardEvent, BoardView, Observer, PendingDelete, SubscriptionId};
pub use drag::{DragGestureProvider, DropEvent};
pub use error::{BoardError, Result};
pub use id::{IdGenerator, TaskId};
pub use message::Message;
pub use task::{EditField, Priority, Status, Task};
pub use todo::{TodoItem, TodoList};
