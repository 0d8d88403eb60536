//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use tareas_board::Message;
///
/// let msg = Message::MouseDown { column: 3, row: 7 };
/// assert!(msg.is_mouse());
/// assert!(!msg.is_terminating());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up within the current column or list.
    NavigateUp,
    /// Move selection down within the current column or list.
    NavigateDown,
    /// Open the selected task for editing.
    Select,
    /// Contextual escape: drop a grab, or clear the selection.
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Switch between the board and the to-do list.
    SwitchView,
    /// Open the prompt for a new task or to-do item.
    NewTask,
    /// Ask to delete the selected task or item.
    Delete,
    /// Pick up the selected card, or drop the card being held.
    Grab,
    /// Flip the completed flag of the selected to-do item.
    Toggle,
    /// Type a character into the active prompt or field.
    Input {
        /// The typed character.
        ch: char,
    },
    /// Delete the character before the cursor.
    Backspace,
    /// Move to the next field of the edit form.
    NextField,
    /// Move to the previous field of the edit form.
    PreviousField,
    /// Accept the active prompt, form, or confirmation.
    Confirm,
    /// Dismiss the active prompt, form, or confirmation.
    Cancel,
    /// Left mouse button pressed.
    MouseDown {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Left mouse button released.
    MouseUp {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message comes from the mouse.
    #[must_use]
    pub const fn is_mouse(self) -> bool {
        matches!(self, Self::MouseDown { .. } | Self::MouseUp { .. })
    }
}
