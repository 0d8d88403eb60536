//! Centralized layout measurements for the TUI.
//!
//! Rendering and mouse hit-testing both go through [`board_area`] and
//! [`column_areas`], so a click always lands on what was drawn.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status line at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each task card in rows.
///
/// Border (2 rows) plus the task text and the priority/comment line.
pub const TASK_CARD_HEIGHT: u16 = 4;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message. The edit
/// form is the tallest element and needs 9 rows.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height for rendering with header.
///
/// Between `MIN_HEIGHT` and this value the header is hidden to reclaim
/// space for the board.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Three columns of at least 13 characters each.
pub const MIN_WIDTH: u16 = 40;

/// Returns the area left for the board or list once the header and the
/// status line are taken out of `area`.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use tareas_tui::layout::board_area;
///
/// let area = board_area(Rect::new(0, 0, 80, 24), true);
/// assert_eq!(area, Rect::new(0, 3, 80, 20));
///
/// let compact = board_area(Rect::new(0, 0, 80, 11), false);
/// assert_eq!(compact, Rect::new(0, 0, 80, 10));
/// ```
#[must_use]
pub fn board_area(area: Rect, header_visible: bool) -> Rect {
    let header = if header_visible { HEADER_HEIGHT } else { 0 };
    Rect {
        x: area.x,
        y: area.y.saturating_add(header),
        width: area.width,
        height: area.height.saturating_sub(header + STATUS_BAR_HEIGHT),
    }
}

/// Splits the board area into three equal columns.
#[must_use]
pub fn column_areas(area: Rect) -> [Rect; 3] {
    Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area)
}

/// Returns how many cards fit in a column body of the given height.
#[must_use]
pub fn visible_cards(body_height: u16) -> usize {
    usize::from((body_height / TASK_CARD_HEIGHT).max(1))
}

/// Calculates the scroll offset that keeps the selected card visible.
///
/// The selection is kept near the middle of the column once the column
/// holds more cards than fit.
#[must_use]
pub fn scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };

    if total <= visible {
        return 0;
    }

    let max_offset = total.saturating_sub(visible);
    selected.saturating_sub(visible / 2).min(max_offset)
}
