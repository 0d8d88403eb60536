//! Drag-and-drop contract.
//!
//! Gesture tracking (pointer presses, key-driven "grab" modes, and so on) is
//! the business of a [`DragGestureProvider`]. The board only ever sees the
//! final [`DropEvent`], which keeps the reordering logic testable without any
//! pointer implementation.

use serde::{Deserialize, Serialize};

use crate::board::Position;

/// A completed drag: where the card came from and where it was released.
///
/// `destination` is `None` when the card was released outside every column.
///
/// # Examples
///
/// ```
/// use tareas_board::{DropEvent, Position, Status};
///
/// let drop = DropEvent::new(
///     Position::new(Status::Pending, 1),
///     Position::new(Status::InProgress, 0),
/// );
/// assert!(!drop.is_noop());
///
/// let cancelled = DropEvent::outside(Position::new(Status::Pending, 1));
/// assert!(cancelled.is_noop());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    /// Slot the card was picked up from.
    pub source: Position,
    /// Slot the card was released over, if any.
    pub destination: Option<Position>,
}

impl DropEvent {
    /// Creates a drop onto a column slot.
    #[must_use]
    pub const fn new(source: Position, destination: Position) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// Creates a drop released outside every column.
    #[must_use]
    pub const fn outside(source: Position) -> Self {
        Self {
            source,
            destination: None,
        }
    }

    /// Returns `true` if applying this drop cannot change the board.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.destination.is_none_or(|dest| dest == self.source)
    }
}

/// Interprets raw gestures and reports completed drops.
///
/// Implementations keep whatever intermediate state a gesture needs (the
/// card under the pointer, the slot a keyboard grab is hovering, ...). Only
/// the gesture that ends a drag yields a [`DropEvent`].
pub trait DragGestureProvider {
    /// The raw input this provider understands.
    type Gesture;

    /// Feeds one gesture, returning a drop when it completes a drag.
    fn interpret(&mut self, gesture: Self::Gesture) -> Option<DropEvent>;

    /// Returns `true` while a drag is in progress.
    fn is_dragging(&self) -> bool;
}
