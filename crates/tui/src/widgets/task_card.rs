//! Task card rendering widget.
//!
//! This module provides functions for rendering individual task cards with
//! color coding based on their priority.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tareas_board::{Priority, Task};

/// Returns the color associated with a priority.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use tareas_board::Priority;
/// use tareas_tui::widgets::priority_color;
///
/// assert_eq!(priority_color(Priority::Low), Color::DarkGray);
/// assert_eq!(priority_color(Priority::Medium), Color::Yellow);
/// assert_eq!(priority_color(Priority::High), Color::Red);
/// ```
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::DarkGray,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::Red,
    }
}

/// Returns a brighter version of the priority color for selected cards.
#[must_use]
const fn priority_color_bright(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Gray,
        Priority::Medium => Color::LightYellow,
        Priority::High => Color::LightRed,
    }
}

/// Color of a card that is being moved.
const GRABBED_COLOR: Color = Color::Magenta;

/// Renders a task card to the buffer.
///
/// The card shows the task text on the first line and the priority,
/// followed by the comment when there is one, on the second. The border
/// color reflects the priority; a card being moved is drawn in magenta
/// with a marker in front of its text.
///
/// ```text
/// ┌────────────────┐
/// │Buy milk        │
/// │Medium · oat    │
/// └────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tareas_board::{Task, TaskId};
/// use tareas_tui::widgets::render_task_card;
///
/// let task = Task::new(TaskId::from_raw(1), "Buy milk");
/// let area = Rect::new(0, 0, 20, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, false, false, area, &mut buf);
/// ```
pub fn render_task_card(
    task: &Task,
    is_selected: bool,
    is_grabbed: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, title_style, detail_style) = if is_grabbed {
        (
            GRABBED_COLOR,
            Style::default()
                .fg(GRABBED_COLOR)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else if is_selected {
        (
            priority_color_bright(task.priority),
            Style::default()
                .fg(priority_color_bright(task.priority))
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            priority_color(task.priority),
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        )
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let marker = if is_grabbed { "» " } else { "" };
    let title = truncate_string(&format!("{marker}{}", task.text), inner_width);

    let detail = match task.comment.as_deref() {
        Some(comment) => format!("{} · {comment}", task.priority.display_name()),
        None => task.priority.display_name().to_string(),
    };

    let content = vec![
        Line::from(Span::styled(title, title_style)),
        Line::from(Span::styled(
            truncate_string(&detail, inner_width),
            detail_style,
        )),
    ];

    let card = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    card.render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
