//! Drag-and-drop gesture providers for the terminal.
//!
//! Two providers turn terminal input into [`DropEvent`]s for the board
//! controller:
//!
//! - [`MouseDrag`]: press over a card, release over a column slot
//! - [`KeyboardDrag`]: grab the selected card, steer the target with the
//!   arrow keys, drop with Enter
//!
//! Both only describe *where* a card goes. Splicing it into place is left to
//! [`BoardController::handle_drop`](tareas_board::BoardController::handle_drop).

use ratatui::layout::{Position as Point, Rect};
use tareas_board::{Board, DragGestureProvider, DropEvent, Position, Status};

use crate::layout::{TASK_CARD_HEIGHT, column_areas, scroll_offset, visible_cards};

/// Screen geometry of one column as it was last drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ColumnHit {
    area: Rect,
    len: usize,
    scroll: usize,
    visible: usize,
}

impl ColumnHit {
    /// First row of the column body, below the top border.
    fn body_top(&self) -> u16 {
        self.area.y.saturating_add(1)
    }

    /// Maps a row to a card index, ignoring the column length.
    fn raw_index(&self, row: u16) -> usize {
        let offset = row.saturating_sub(self.body_top()) / TASK_CARD_HEIGHT;
        self.scroll + usize::from(offset)
    }
}

/// Maps terminal cells back to board positions.
///
/// Built from the same layout helpers the board widget renders with, so
/// it agrees with what is on screen.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use tareas_board::{Board, Position, Status, Task, TaskId};
/// use tareas_tui::drag::BoardHitMap;
///
/// let mut board = Board::new();
/// board.push(Task::new(TaskId::from_raw(1), "Only task"));
///
/// let map = BoardHitMap::new(&board, Rect::new(0, 0, 90, 20), None);
/// assert_eq!(map.card_at(5, 2), Some(Position::new(Status::Pending, 0)));
/// assert_eq!(map.card_at(5, 6), None);
/// assert_eq!(map.slot_at(5, 6), Some(Position::new(Status::Pending, 1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardHitMap {
    columns: [ColumnHit; 3],
}

impl BoardHitMap {
    /// Computes the hit map for `board` drawn into `area`.
    ///
    /// `selected` is the board selection, which decides how far the
    /// selected column is scrolled.
    #[must_use]
    pub fn new(board: &Board, area: Rect, selected: Option<Position>) -> Self {
        let areas = column_areas(area);
        let columns = Status::all().map(|status| {
            let area = areas[status.index()];
            let len = board.column(status).len();
            let visible = visible_cards(area.height.saturating_sub(2));
            let selected_idx = selected
                .filter(|pos| pos.column == status)
                .map(|pos| pos.index);
            ColumnHit {
                area,
                len,
                scroll: scroll_offset(selected_idx, len, visible),
                visible,
            }
        });
        Self { columns }
    }

    fn column_at(&self, x: u16, y: u16) -> Option<(Status, &ColumnHit)> {
        Status::all()
            .into_iter()
            .zip(self.columns.iter())
            .find(|(_, hit)| hit.area.contains(Point { x, y }))
    }

    /// Returns the card drawn at the given cell, if any.
    #[must_use]
    pub fn card_at(&self, x: u16, y: u16) -> Option<Position> {
        let (status, hit) = self.column_at(x, y)?;
        if y < hit.body_top() || y >= hit.area.bottom().saturating_sub(1) {
            return None;
        }

        let index = hit.raw_index(y);
        (index < hit.len && index < hit.scroll + hit.visible).then(|| Position::new(status, index))
    }

    /// Returns the slot a card dropped at the given cell would land in.
    ///
    /// Anywhere inside a column counts; positions below the last card
    /// append to the column.
    #[must_use]
    pub fn slot_at(&self, x: u16, y: u16) -> Option<Position> {
        let (status, hit) = self.column_at(x, y)?;
        let index = if y < hit.body_top() {
            hit.scroll
        } else {
            hit.raw_index(y)
        };
        Some(Position::new(status, index.min(hit.len)))
    }
}

/// Raw mouse input understood by [`MouseDrag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseGesture {
    /// Left button pressed at a cell.
    Press {
        /// Terminal column.
        x: u16,
        /// Terminal row.
        y: u16,
    },
    /// Left button released at a cell.
    Release {
        /// Terminal column.
        x: u16,
        /// Terminal row.
        y: u16,
    },
}

/// Press-drag-release gestures with the mouse.
///
/// A press over a card picks it up. The matching release yields a drop:
/// onto the slot under the pointer, or with no destination when released
/// outside the board.
#[derive(Debug, Clone, Default)]
pub struct MouseDrag {
    hit_map: BoardHitMap,
    source: Option<Position>,
}

impl MouseDrag {
    /// Creates an idle provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the geometry used to resolve cells.
    pub fn set_hit_map(&mut self, hit_map: BoardHitMap) {
        self.hit_map = hit_map;
    }

    /// Returns the card being dragged, if any.
    #[must_use]
    pub fn source(&self) -> Option<Position> {
        self.source
    }

    /// Forgets a pressed card without dropping it.
    pub fn cancel(&mut self) {
        self.source = None;
    }
}

impl DragGestureProvider for MouseDrag {
    type Gesture = MouseGesture;

    fn interpret(&mut self, gesture: MouseGesture) -> Option<DropEvent> {
        match gesture {
            MouseGesture::Press { x, y } => {
                self.source = self.hit_map.card_at(x, y);
                None
            }
            MouseGesture::Release { x, y } => {
                let source = self.source.take()?;
                Some(DropEvent {
                    source,
                    destination: self.hit_map.slot_at(x, y),
                })
            }
        }
    }

    fn is_dragging(&self) -> bool {
        self.source.is_some()
    }
}

/// Raw keyboard input understood by [`KeyboardDrag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyGesture {
    /// Pick up the card at `source`.
    Grab {
        /// The card to move.
        source: Position,
        /// Length of each column at grab time, in status order.
        lengths: [usize; 3],
    },
    /// Move the target one column left.
    Left,
    /// Move the target one column right.
    Right,
    /// Move the target one slot up.
    Up,
    /// Move the target one slot down.
    Down,
    /// Drop the card at the target.
    Drop,
    /// Put the card back where it was.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Grab {
    source: Position,
    target: Position,
    lengths: [usize; 3],
}

impl Grab {
    /// Highest index the card can end up at in `column`.
    fn max_index(&self, column: Status) -> usize {
        let len = self.lengths[column.index()];
        if column == self.source.column {
            len.saturating_sub(1)
        } else {
            len
        }
    }

    fn retarget(&mut self, column: Status, index: usize) {
        self.target = Position::new(column, index.min(self.max_index(column)));
    }
}

/// Keyboard-driven drags.
///
/// # Examples
///
/// ```
/// use tareas_board::{DragGestureProvider, Position, Status};
/// use tareas_tui::drag::{KeyGesture, KeyboardDrag};
///
/// let mut drag = KeyboardDrag::new();
/// let source = Position::new(Status::Pending, 1);
/// drag.interpret(KeyGesture::Grab { source, lengths: [2, 0, 3] });
/// drag.interpret(KeyGesture::Right);
///
/// let drop = drag.interpret(KeyGesture::Drop).unwrap();
/// assert_eq!(drop.destination, Some(Position::new(Status::InProgress, 0)));
/// assert!(!drag.is_dragging());
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyboardDrag {
    grab: Option<Grab>,
}

impl KeyboardDrag {
    /// Creates an idle provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the card being moved, if any.
    #[must_use]
    pub fn source(&self) -> Option<Position> {
        self.grab.map(|g| g.source)
    }

    /// Returns where the card would land if dropped now.
    #[must_use]
    pub fn target(&self) -> Option<Position> {
        self.grab.map(|g| g.target)
    }
}

impl DragGestureProvider for KeyboardDrag {
    type Gesture = KeyGesture;

    fn interpret(&mut self, gesture: KeyGesture) -> Option<DropEvent> {
        if let KeyGesture::Grab { source, lengths } = gesture {
            if self.grab.is_none() && source.index < lengths[source.column.index()] {
                self.grab = Some(Grab {
                    source,
                    target: source,
                    lengths,
                });
            }
            return None;
        }

        let grab = self.grab.as_mut()?;
        let target = grab.target;
        match gesture {
            KeyGesture::Left => {
                if let Some(column) = target.column.previous() {
                    grab.retarget(column, target.index);
                }
            }
            KeyGesture::Right => {
                if let Some(column) = target.column.next() {
                    grab.retarget(column, target.index);
                }
            }
            KeyGesture::Up => grab.retarget(target.column, target.index.saturating_sub(1)),
            KeyGesture::Down => grab.retarget(target.column, target.index + 1),
            KeyGesture::Drop => {
                let grab = self.grab.take()?;
                return Some(DropEvent::new(grab.source, grab.target));
            }
            KeyGesture::Cancel => self.grab = None,
            KeyGesture::Grab { .. } => {}
        }
        None
    }

    fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }
}
