//! One-line prompt for new tasks and to-do items.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;
use crate::input::{Prompt, TextInput};

const PROMPT_WIDTH: u16 = 50;
const PROMPT_HEIGHT: u16 = 5;

/// Turns a text input into spans, drawing the cursor when `focused`.
///
/// The cursor is shown by reversing the character under it, or a trailing
/// space when it sits at the end.
pub(crate) fn input_spans(input: &TextInput, focused: bool, style: Style) -> Vec<Span<'_>> {
    if !focused {
        return vec![Span::styled(input.value(), style)];
    }

    let (before, at, after) = input.split_at_cursor();
    let cursor_style = style.add_modifier(Modifier::REVERSED);
    let cursor = match at {
        Some(ch) => Span::styled(ch.to_string(), cursor_style),
        None => Span::styled(" ", cursor_style),
    };
    vec![
        Span::styled(before, style),
        cursor,
        Span::styled(after, style),
    ]
}

/// Renders the prompt centered in `area`.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tareas_tui::input::{Prompt, PromptTarget};
/// use tareas_tui::widgets::render_prompt;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_prompt(&Prompt::new(PromptTarget::Task), area, &mut buf);
/// ```
pub fn render_prompt(prompt: &Prompt, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(PROMPT_WIDTH, PROMPT_HEIGHT, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            prompt.target.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let mut input = vec![Span::styled(" > ", Style::default().fg(Color::Yellow))];
    input.extend(input_spans(&prompt.input, true, Style::default()));

    let lines = vec![
        Line::from(input),
        Line::from(""),
        Line::from(Span::styled(
            " Enter add  Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    Paragraph::new(lines).block(block).render(popup_area, buf);
}
