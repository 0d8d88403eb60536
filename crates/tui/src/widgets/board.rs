//! Kanban board rendering widget.
//!
//! This module provides functions for rendering the complete board with its
//! three columns arranged horizontally.

use ratatui::{buffer::Buffer, layout::Rect};
use tareas_board::{Board, Position, Status};

use super::column::{ColumnFocus, ColumnPosition, render_column};
use crate::layout::column_areas;

/// Renders the complete board to the buffer.
///
/// The board displays the Pending, In Progress and Processed columns with
/// equal widths. The focused column and its selected card are highlighted;
/// `grabbed` marks a card that is being moved with the keyboard.
///
/// ```text
/// ╭ Pending (2) ──┬ In Progress (1) ┬ Processed (0) ╮
/// │ Task 1        │ Task 3          │ No tasks      │
/// │ Task 2        │                 │               │
/// ╰───────────────┴─────────────────┴───────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tareas_board::{Board, Status, Task, TaskId};
/// use tareas_tui::widgets::render_board;
///
/// let mut board = Board::new();
/// board.push(Task::new(TaskId::from_raw(1), "Task 1"));
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, Status::Pending, Some(0), None, area, &mut buf);
/// ```
pub fn render_board(
    board: &Board,
    focused_column: Status,
    selected_task: Option<usize>,
    grabbed: Option<Position>,
    area: Rect,
    buf: &mut Buffer,
) {
    let areas = column_areas(area);
    let count = areas.len();

    for (i, status) in Status::all().into_iter().enumerate() {
        let focused = status == focused_column;
        let focus = ColumnFocus {
            focused,
            prev_focused: status.previous() == Some(focused_column),
            selected: selected_task.filter(|_| focused),
            grabbed: grabbed
                .filter(|pos| pos.column == status)
                .map(|pos| pos.index),
        };

        render_column(
            board.column(status),
            focus,
            ColumnPosition::of(i, count),
            areas[i],
            buf,
        );
    }
}
