//! Delete confirmation modal.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use tareas_board::{Board, PendingDelete};

use super::centered_rect;

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 7;

/// Renders the confirmation for a staged deletion, centered in `area`.
///
/// The task is looked up in the column the deletion was staged for. If it
/// is no longer there the modal says so; confirming then removes nothing.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tareas_board::{BoardController, Status};
/// use tareas_tui::widgets::render_confirm_modal;
///
/// let mut controller = BoardController::new();
/// let id = controller.add_task("Old task").unwrap();
/// controller.request_delete(Status::Pending, id);
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// let pending = controller.pending_delete().unwrap();
/// render_confirm_modal(controller.board(), pending, area, &mut buf);
/// ```
pub fn render_confirm_modal(
    board: &Board,
    pending: &PendingDelete,
    area: Rect,
    buf: &mut Buffer,
) {
    let popup_area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Delete task ",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightRed));

    let question = match board.column(pending.column).get_task(pending.id) {
        Some(task) => Line::from(vec![
            Span::raw(" Delete \""),
            Span::styled(
                task.text.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("\" from {}?", pending.column.display_name())),
        ]),
        None => Line::from(Span::styled(
            " This task is no longer here.",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let key_style = Style::default().fg(Color::Yellow);
    let lines = vec![
        Line::from(""),
        question,
        Line::from(""),
        Line::from(vec![
            Span::styled(" y", key_style),
            Span::raw(" delete   "),
            Span::styled("n", key_style),
            Span::raw(" keep"),
        ]),
    ];

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .render(popup_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use tareas_board::{Status, Task, TaskId};

    fn board() -> Board {
        let mut board = Board::new();
        board.push(Task::new(TaskId::from_raw(7), "Old task"));
        board
    }

    #[test]
    fn asks_about_the_staged_task() {
        let pending = PendingDelete {
            column: Status::Pending,
            id: TaskId::from_raw(7),
        };
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);

        render_confirm_modal(&board(), &pending, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Delete task"));
        assert!(content.contains("Delete \"Old task\" from Pending?"));
        assert!(content.contains("y delete   n keep"));
    }

    #[test]
    fn stale_request_is_reported() {
        // Staged for the wrong column: nothing would be removed.
        let pending = PendingDelete {
            column: Status::Processed,
            id: TaskId::from_raw(7),
        };
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);

        render_confirm_modal(&board(), &pending, area, &mut buf);

        assert!(buffer_to_string(&buf).contains("no longer here"));
    }
}
