//! Edit modal for a staged task.
//!
//! The modal shows the working copy held by the board controller together
//! with the cursor and focus kept in [`EditForm`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use tareas_board::Task;

use super::centered_rect;
use super::prompt::input_spans;
use super::task_card::priority_color;
use crate::input::{EditForm, FormField};

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 9;

/// Width of the label column, including its indent.
const LABEL_WIDTH: usize = 12;

/// Renders the edit modal centered in `area`.
///
/// ```text
/// ╭ Edit task ───────────────────────────────────────╮
/// │  Text      Buy milk                              │
/// │  Priority  ◂ Medium ▸                            │
/// │  Comment   oat, not dairy                        │
/// │                                                  │
/// │  Column    Pending                               │
/// │                                                  │
/// │  Tab next field  ←→ priority  Enter save  Esc …  │
/// ╰──────────────────────────────────────────────────╯
/// ```
pub fn render_edit_modal(task: &Task, form: &EditForm, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Edit task ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightCyan));

    let priority = Span::styled(
        format!("◂ {} ▸", form.priority.display_name()),
        Style::default().fg(priority_color(form.priority)),
    );

    let lines = vec![
        field_line(
            FormField::Text,
            form,
            input_spans(&form.text, form.focus == FormField::Text, Style::default()),
        ),
        field_line(FormField::Priority, form, vec![priority]),
        field_line(
            FormField::Comment,
            form,
            input_spans(
                &form.comment,
                form.focus == FormField::Comment,
                Style::default(),
            ),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{:<LABEL_WIDTH$}", "  Column"),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                task.status.display_name(),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Tab next field  ←→ priority  Enter save  Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    Paragraph::new(lines).block(block).render(popup_area, buf);
}

fn field_line<'a>(field: FormField, form: &EditForm, value: Vec<Span<'a>>) -> Line<'a> {
    let label_style = if form.focus == field {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::styled(
        format!("{:<LABEL_WIDTH$}", format!("  {}", field.label())),
        label_style,
    )];
    spans.extend(value);
    Line::from(spans)
}
