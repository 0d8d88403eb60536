//! Task-related types for the board.
//!
//! This module defines the status a task is filed under, its display
//! priority, the task structure itself, and the fields that can be edited
//! through the edit modal.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::id::TaskId;

/// The workflow status of a task.
///
/// Each status owns one column of the board, and a task lives in exactly
/// the column matching its status.
///
/// # Examples
///
/// ```
/// use tareas_board::Status;
///
/// let status: Status = "en-proceso".parse().unwrap();
/// assert_eq!(status, Status::InProgress);
/// assert_eq!(status.display_name(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Tasks waiting to be started.
    #[default]
    #[serde(alias = "pendiente")]
    Pending,
    /// Tasks currently being worked on.
    #[serde(alias = "en-proceso")]
    InProgress,
    /// Finished tasks.
    #[serde(alias = "procesado")]
    Processed,
}

impl Status {
    /// Returns all statuses in column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas_board::Status;
    ///
    /// let all = Status::all();
    /// assert_eq!(all.len(), 3);
    /// assert_eq!(all[0], Status::Pending);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Pending, Self::InProgress, Self::Processed]
    }

    /// Returns the stable identifier used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Processed => "processed",
        }
    }

    /// Returns a human-readable column title.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Processed => "Processed",
        }
    }

    /// Returns the column index of this status (0-2).
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas_board::Status;
    ///
    /// assert_eq!(Status::Pending.index(), 0);
    /// assert_eq!(Status::Processed.index(), 2);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Processed => 2,
        }
    }

    /// Creates a `Status` from its column index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Pending),
            1 => Some(Self::InProgress),
            2 => Some(Self::Processed),
            _ => None,
        }
    }

    /// Returns the column to the right, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the column to the left, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }
}

impl FromStr for Status {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" | "pendiente" => Ok(Self::Pending),
            "in-progress" | "in_progress" | "en-proceso" => Ok(Self::InProgress),
            "processed" | "procesado" => Ok(Self::Processed),
            _ => Err(BoardError::InvalidStatus(s.to_string())),
        }
    }
}

/// Display priority of a task.
///
/// Priority only affects color coding; it never changes ordering.
///
/// # Examples
///
/// ```
/// use tareas_board::Priority;
///
/// assert_eq!(Priority::default(), Priority::Low);
/// assert_eq!(Priority::Low.cycle_up(), Priority::Medium);
/// assert_eq!(Priority::High.cycle_up(), Priority::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Nice to have.
    #[default]
    #[serde(alias = "baja")]
    Low,
    /// Should be done soon.
    #[serde(alias = "media")]
    Medium,
    /// Needs attention first.
    #[serde(alias = "alta")]
    High,
}

impl Priority {
    /// Returns all priorities from lowest to highest.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    /// Returns a human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Returns the next higher priority, wrapping from `High` to `Low`.
    #[must_use]
    pub const fn cycle_up(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Returns the next lower priority, wrapping from `Low` to `High`.
    #[must_use]
    pub const fn cycle_down(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }
}

impl FromStr for Priority {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "baja" => Ok(Self::Low),
            "medium" | "media" => Ok(Self::Medium),
            "high" | "alta" => Ok(Self::High),
            _ => Err(BoardError::InvalidPriority(s.to_string())),
        }
    }
}

/// A task on the board.
///
/// # Examples
///
/// ```
/// use tareas_board::{Priority, Status, Task, TaskId};
///
/// let task = Task::new(TaskId::from_raw(1), "Buy milk");
/// assert_eq!(task.status, Status::Pending);
/// assert_eq!(task.priority, Priority::Low);
/// assert!(task.comment.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short label shown on the card.
    pub text: String,
    /// Which column this task currently resides in.
    pub status: Status,
    /// Display priority.
    pub priority: Priority,
    /// Optional free-form comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// When this task was created.
    pub created_at: DateTime<Utc>,
    /// When this task was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending, low-priority task without a comment.
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            text: text.into(),
            status: Status::Pending,
            priority: Priority::Low,
            comment: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the task to a different status and refreshes `updated_at`.
    pub fn move_to(&mut self, status: Status) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Applies a single field edit.
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas_board::{EditField, Priority, Task, TaskId};
    ///
    /// let mut task = Task::new(TaskId::from_raw(1), "Buy milk");
    /// task.apply(EditField::Priority(Priority::High));
    /// assert_eq!(task.priority, Priority::High);
    /// ```
    pub fn apply(&mut self, field: EditField) {
        match field {
            EditField::Text(text) => self.text = text,
            EditField::Priority(priority) => self.priority = priority,
            EditField::Comment(comment) => self.comment = comment,
        }
    }
}

/// An edit to one field of a staged task.
///
/// Status is deliberately absent: a task only changes column by being moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditField {
    /// Replace the task label.
    Text(String),
    /// Replace the display priority.
    Priority(Priority),
    /// Replace the comment; `None` clears it.
    Comment(Option<String>),
}

impl EditField {
    /// Parses a `(field, value)` pair as sent by a form.
    ///
    /// Recognised fields are `text`, `priority`, and `comment`. An empty
    /// comment clears it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownField`] for an unrecognised field and
    /// [`BoardError::InvalidPriority`] for an unrecognised priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas_board::{EditField, Priority};
    ///
    /// let field = EditField::parse("priority", "high").unwrap();
    /// assert_eq!(field, EditField::Priority(Priority::High));
    ///
    /// assert!(EditField::parse("status", "processed").is_err());
    /// ```
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match field {
            "text" => Ok(Self::Text(value.to_string())),
            "priority" => Ok(Self::Priority(value.parse()?)),
            "comment" if value.trim().is_empty() => Ok(Self::Comment(None)),
            "comment" => Ok(Self::Comment(Some(value.to_string()))),
            other => Err(BoardError::UnknownField(other.to_string())),
        }
    }
}
