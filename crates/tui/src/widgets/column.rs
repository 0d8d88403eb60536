//! Column rendering widget.
//!
//! This module provides functions for rendering individual board columns
//! with their headers and task lists.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tareas_board::Column;

use super::task_card::render_task_card;
use crate::layout::{TASK_CARD_HEIGHT, scroll_offset, visible_cards};

/// Position of a column in the horizontal layout.
///
/// Used to determine which borders to render for each column, enabling
/// collapsed borders between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// Leftmost column: rounded corners on the left.
    First,
    /// Middle column: T-connectors on the left.
    Middle,
    /// Rightmost column: T-connectors on the left, rounded on the right.
    Last,
}

impl ColumnPosition {
    /// Returns the position of the column at `index` out of `count`.
    #[must_use]
    pub const fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 >= count {
            Self::Last
        } else {
            Self::Middle
        }
    }
}

const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// How a column is drawn in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnFocus {
    /// Whether this column has focus.
    pub focused: bool,
    /// Whether the column to the left has focus, for the shared border.
    pub prev_focused: bool,
    /// Index of the selected card, only meaningful when focused.
    pub selected: Option<usize>,
    /// Index of the card being moved, if it lives in this column.
    pub grabbed: Option<usize>,
}

/// Renders a single column to the buffer.
///
/// A column displays its header (status name and task count) followed by a
/// vertical list of task cards. Empty columns show a "No tasks" placeholder.
///
/// ```text
/// ╭ Pending (2) ──────
/// │┌────────────────┐
/// ││Buy milk        │
/// ││Low             │
/// │└────────────────┘
/// ╰──────────────────
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tareas_board::{Board, Status, Task, TaskId};
/// use tareas_tui::widgets::{ColumnFocus, ColumnPosition, render_column};
///
/// let mut board = Board::new();
/// board.push(Task::new(TaskId::from_raw(1), "Buy milk"));
///
/// let area = Rect::new(0, 0, 20, 15);
/// let mut buf = Buffer::empty(area);
/// let focus = ColumnFocus { focused: true, selected: Some(0), ..ColumnFocus::default() };
///
/// render_column(board.column(Status::Pending), focus, ColumnPosition::First, area, &mut buf);
/// ```
pub fn render_column(
    column: &Column,
    focus: ColumnFocus,
    position: ColumnPosition,
    area: Rect,
    buf: &mut Buffer,
) {
    let border_style = if focus.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = format!(" {} ({}) ", column.status.display_name(), column.len());
    let title_style = if focus.focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Adjacent columns share a border: only the last one draws its right edge.
    let (borders, border_set) = match position {
        ColumnPosition::First => (
            Borders::TOP | Borders::BOTTOM | Borders::LEFT,
            BORDER_SET_FIRST,
        ),
        ColumnPosition::Middle => (
            Borders::TOP | Borders::BOTTOM | Borders::LEFT,
            BORDER_SET_MIDDLE,
        ),
        ColumnPosition::Last => (Borders::ALL, BORDER_SET_LAST),
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    // The left border is shared with the previous column; keep it cyan when
    // that column has focus.
    if focus.prev_focused && !focus.focused && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        for y in area.y..area.bottom() {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if column.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    let selected = focus.selected.filter(|_| focus.focused);
    let visible = visible_cards(inner_area.height);
    let offset = scroll_offset(selected, column.len(), visible);

    let shown = column.len().saturating_sub(offset).min(visible);
    let card_areas = Layout::vertical(
        std::iter::repeat_n(Constraint::Length(TASK_CARD_HEIGHT), shown)
            .chain(std::iter::once(Constraint::Min(0))),
    )
    .split(inner_area);

    for (task_idx, card_area) in (offset..).zip(card_areas.iter().take(shown)) {
        let Some(task) = column.tasks.get(task_idx) else {
            break;
        };
        let is_selected = selected == Some(task_idx);
        let is_grabbed = focus.grabbed == Some(task_idx);
        render_task_card(task, is_selected, is_grabbed, *card_area, buf);
    }
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use tareas_board::{Board, Status, Task, TaskId};

    fn board_with(count: u64) -> Board {
        let mut board = Board::new();
        for n in 1..=count {
            board.push(Task::new(TaskId::from_raw(n), format!("Task {n}")));
        }
        board
    }

    #[test]
    fn position_of_index() {
        assert_eq!(ColumnPosition::of(0, 3), ColumnPosition::First);
        assert_eq!(ColumnPosition::of(1, 3), ColumnPosition::Middle);
        assert_eq!(ColumnPosition::of(2, 3), ColumnPosition::Last);
    }

    #[test]
    fn render_empty_column() {
        let board = Board::new();
        let area = Rect::new(0, 0, 20, 15);
        let mut buf = Buffer::empty(area);

        render_column(
            board.column(Status::Processed),
            ColumnFocus::default(),
            ColumnPosition::Last,
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Processed (0)"));
        assert!(content.contains("No tasks"));
    }

    #[test]
    fn render_column_with_tasks() {
        let board = board_with(2);
        let area = Rect::new(0, 0, 25, 15);
        let mut buf = Buffer::empty(area);

        render_column(
            board.column(Status::Pending),
            ColumnFocus {
                focused: true,
                selected: Some(0),
                ..ColumnFocus::default()
            },
            ColumnPosition::First,
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Pending (2)"));
        assert!(content.contains("Task 1"));
        assert!(content.contains("Task 2"));
    }

    #[test]
    fn selected_card_scrolls_into_view() {
        let board = board_with(8);
        // 2 border rows + room for 3 cards
        let area = Rect::new(0, 0, 25, 14);
        let mut buf = Buffer::empty(area);

        render_column(
            board.column(Status::Pending),
            ColumnFocus {
                focused: true,
                selected: Some(7),
                ..ColumnFocus::default()
            },
            ColumnPosition::First,
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Task 8"));
        assert!(content.contains("Task 6"));
        assert!(!content.contains("Task 1 "));
    }

    #[test]
    fn unfocused_column_ignores_selection() {
        let board = board_with(1);
        let area = Rect::new(0, 0, 25, 10);
        let mut buf = Buffer::empty(area);

        render_column(
            board.column(Status::Pending),
            ColumnFocus {
                focused: false,
                selected: Some(0),
                ..ColumnFocus::default()
            },
            ColumnPosition::Middle,
            area,
            &mut buf,
        );

        // Unselected low-priority cards keep the dim border.
        assert_eq!(buf.cell((1, 1)).map(|c| c.fg), Some(Color::DarkGray));
    }

    #[test]
    fn shared_border_follows_previous_focus() {
        let board = Board::new();
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);

        render_column(
            board.column(Status::InProgress),
            ColumnFocus {
                prev_focused: true,
                ..ColumnFocus::default()
            },
            ColumnPosition::Middle,
            area,
            &mut buf,
        );

        assert_eq!(buf.cell((0, 3)).map(|c| c.fg), Some(Color::Cyan));
        assert_eq!(buf.cell((19, 0)).map(|c| c.fg), Some(Color::DarkGray));
    }
}
