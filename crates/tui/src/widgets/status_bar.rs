//! Status bar rendering widget.
//!
//! This module renders the one-line footer with keybinding hints and the
//! outcome of the last action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tareas_config::StartView;

/// Hints shown on the board.
const BOARD_HINTS: &[(&str, &str)] = &[
    ("n", "New"),
    ("Enter", "Edit"),
    ("m", "Move"),
    ("d", "Delete"),
    ("Tab", "To-do"),
    ("?", "Help"),
];

/// Hints shown on the to-do list.
const LIST_HINTS: &[(&str, &str)] = &[
    ("n", "New"),
    ("Space", "Toggle"),
    ("d", "Delete"),
    ("Tab", "Board"),
    ("?", "Help"),
];

/// Hints shown while a card is being moved with the keyboard.
pub(crate) const MOVE_HINTS: &[(&str, &str)] =
    &[("←→↑↓", "Choose slot"), ("Enter", "Drop"), ("Esc", "Cancel")];

/// Returns the hints for a view.
#[must_use]
pub const fn view_hints(view: StartView) -> &'static [(&'static str, &'static str)] {
    match view {
        StartView::Board => BOARD_HINTS,
        StartView::List => LIST_HINTS,
    }
}

/// Renders the status bar.
///
/// The last status message, when there is one, comes first, followed by
/// the keybinding hints.
///
/// ```text
/// Moved "Buy milk" to In Progress | n New  Enter Edit  m Move  ...
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tareas_config::StartView;
/// use tareas_tui::widgets::{render_status_bar, view_hints};
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Some("Task added"), view_hints(StartView::Board), area, &mut buf);
/// ```
pub fn render_status_bar(
    message: Option<&str>,
    hints: &[(&str, &str)],
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let message_style = Style::default().fg(Color::Cyan);
    let separator_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    if let Some(message) = message {
        spans.push(Span::styled(message.to_string(), message_style));
        spans.push(Span::styled(" | ", separator_style));
    }
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), key_style));
        spans.push(Span::styled(format!(" {action}"), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
