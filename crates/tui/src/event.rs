//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Keys mean different things depending on what
//! has focus, so the mapping is chosen by [`InputMode`].

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tareas_board::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Which key mapping applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Browsing the board or the list.
    #[default]
    Normal,
    /// Typing into a prompt or the edit form.
    Text,
    /// Answering a yes/no confirmation.
    Confirm,
}

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) => match mode {
            InputMode::Normal => key_to_message(*key),
            InputMode::Text => key_to_input_message(*key),
            InputMode::Confirm => key_to_confirm_message(*key),
        },
        Event::Mouse(mouse) if mode == InputMode::Normal => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only the left button is handled. Press and release are reported
/// separately so that a drag can span them.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::MouseDown { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::MouseUp { column, row }),
        _ => None,
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a key event to a message while browsing.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (drop a grab or clear selection) |
/// | Arrows | Navigate |
/// | `Enter` | Select (edit a task, drop a grabbed card) |
/// | `Space` | Toggle a to-do item |
/// | `Tab` | Switch between board and list |
/// | `n` | New task or item |
/// | `d` | Delete |
/// | `m` | Grab or drop a card |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter => Some(Message::Select),
        KeyCode::Char(' ') => Some(Message::Toggle),
        KeyCode::Tab => Some(Message::SwitchView),

        KeyCode::Char('n') => Some(Message::NewTask),
        KeyCode::Char('d') => Some(Message::Delete),
        KeyCode::Char('m') => Some(Message::Grab),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a message while typing.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Enter` | Confirm |
/// | `Esc` | Cancel |
/// | `Tab` / `Shift+Tab` | Next / previous field |
/// | `Left` / `Right` | Move cursor or change priority |
/// | `Backspace` | Delete before cursor |
/// | Any char | Input |
#[must_use]
pub fn key_to_input_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::Confirm),
        KeyCode::Esc => Some(Message::Cancel),
        KeyCode::Tab => Some(Message::NextField),
        KeyCode::BackTab => Some(Message::PreviousField),
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(ch) => Some(Message::Input { ch }),
        _ => None,
    }
}

/// Converts a key event to a message while a confirmation is open.
///
/// `y` or `Enter` confirms, `n` or `Esc` cancels.
#[must_use]
pub fn key_to_confirm_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('y' | 'Y') => Some(Message::Confirm),
        KeyCode::Esc | KeyCode::Char('n' | 'N') => Some(Message::Cancel),
        _ => None,
    }
}
