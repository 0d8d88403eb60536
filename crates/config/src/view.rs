//! Which screen the application opens on.

use serde::{Deserialize, Serialize};

/// The screen shown at startup.
///
/// # Examples
///
/// ```
/// use tareas_config::StartView;
///
/// assert_eq!(StartView::default(), StartView::Board);
/// assert_eq!(StartView::Board.toggle(), StartView::List);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    /// The three-column kanban board.
    #[default]
    Board,
    /// The flat to-do list.
    List,
}

impl StartView {
    /// Returns the other view.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Board => Self::List,
            Self::List => Self::Board,
        }
    }

    /// Returns the title shown in the header.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Board => "Board",
            Self::List => "To-do",
        }
    }
}
