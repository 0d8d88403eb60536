//! To-do list rendering widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use tareas_board::{TodoItem, TodoList};

/// Renders the to-do list to the buffer.
///
/// Each item is drawn as a checkbox followed by its text. Completed items
/// are dimmed and struck through. The title counts the items left to do.
///
/// ```text
/// ╭ To-do (1 left) ──────────╮
/// │> [ ] Water the plants    │
/// │  [x] Take out recycling  │
/// ╰──────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tareas_board::TodoList;
/// use tareas_tui::widgets::render_todo_list;
///
/// let mut list = TodoList::new();
/// list.add("Water the plants");
///
/// let area = Rect::new(0, 0, 40, 10);
/// let mut buf = Buffer::empty(area);
/// render_todo_list(&list, Some(0), area, &mut buf);
/// ```
pub fn render_todo_list(list: &TodoList, selected: Option<usize>, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            format!(" To-do ({} left) ", list.remaining()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if list.is_empty() {
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Line::from(Span::styled(
            "Nothing to do. Press n to add an item.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .render(inner, buf);
        return;
    }

    let items: Vec<ListItem<'_>> = list.items().iter().map(item_line).collect();
    let widget = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(selected);
    StatefulWidget::render(widget, area, buf, &mut state);
}

fn item_line(item: &TodoItem) -> ListItem<'_> {
    let (checkbox, style) = if item.completed {
        (
            "[x] ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default())
    };

    ListItem::new(Line::from(vec![
        Span::styled(checkbox, Style::default().fg(Color::Green)),
        Span::styled(item.text.as_str(), style),
    ]))
}
