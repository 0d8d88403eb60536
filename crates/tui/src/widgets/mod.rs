//! Widget components for the tareas TUI.
//!
//! Each widget is a plain function that renders borrowed state into a
//! buffer, which keeps them easy to test and compose.
//!
//! # Modules
//!
//! - [`board`]: the three columns side by side
//! - [`column`]: one column with its header and cards
//! - [`task_card`]: a single card, colored by priority
//! - [`todo_list`]: the basic to-do list
//! - [`prompt`]: the one-line "new task" / "new item" prompt
//! - [`edit_modal`]: the edit form over a staged working copy
//! - [`confirm_modal`]: the delete confirmation
//! - [`help`]: the keybinding overlay
//! - [`status_bar`]: the footer with hints and the last message
//!
//! # Color Coding
//!
//! | Priority | Color |
//! |----------|-------|
//! | `Low` | Gray (`Color::DarkGray`) |
//! | `Medium` | Yellow (`Color::Yellow`) |
//! | `High` | Red (`Color::Red`) |
//!
//! A card being moved is drawn in magenta.
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use tareas_board::{Board, Status, Task, TaskId};
//! use tareas_tui::widgets;
//!
//! let mut board = Board::new();
//! board.push(Task::new(TaskId::from_raw(1), "Example"));
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&board, Status::Pending, Some(0), None, area, &mut buf);
//! ```

use ratatui::layout::Rect;

pub mod board;
pub mod column;
pub mod confirm_modal;
pub mod edit_modal;
pub mod help;
pub mod prompt;
pub mod status_bar;
pub mod task_card;
pub mod todo_list;

// Re-export primary rendering functions for convenience
pub use board::render_board;
pub use column::{ColumnFocus, ColumnPosition, render_column};
pub use confirm_modal::render_confirm_modal;
pub use edit_modal::render_edit_modal;
pub use help::render_help_overlay;
pub use prompt::render_prompt;
pub use status_bar::{render_status_bar, view_hints};
pub use task_card::{priority_color, render_task_card};
pub use todo_list::render_todo_list;

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// is clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
