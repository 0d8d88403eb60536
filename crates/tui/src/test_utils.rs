//! Helpers shared by the rendering tests.

use ratatui::buffer::Buffer;

/// Renders a [`Buffer`] as text, one line per row.
///
/// Trailing spaces are trimmed from each row so snapshots stay readable;
/// every row, including the last, ends with a newline.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in buf.area.top()..buf.area.bottom() {
        let row: String = (buf.area.left()..buf.area.right())
            .filter_map(|x| buf.cell((x, y)))
            .map(|cell| cell.symbol())
            .collect();
        result.push_str(row.trim_end_matches(' '));
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn rows_are_trimmed() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        buf.set_string(0, 0, "Hello", Style::default());

        assert_eq!(buffer_to_string(&buf), "Hello\n\n");
    }

    #[test]
    fn offset_buffers_are_read_from_their_area() {
        let mut buf = Buffer::empty(Rect::new(3, 2, 4, 1));
        buf.set_string(3, 2, "abcd", Style::default());

        assert_eq!(buffer_to_string(&buf), "abcd\n");
    }
}
