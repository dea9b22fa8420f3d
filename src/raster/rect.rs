//! Rectangles, box-drawn frames and grids.

use super::{plot, Brush};
use crate::buffer::GlyphBuffer;
use crate::error::ConfigError;
use crate::geometry::{Point, Rect};

/// Box-drawing characters used by [`frame`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoxGlyphs {
    /// Top and bottom edges.
    pub horizontal: char,
    /// Left and right edges.
    pub vertical: char,
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
}

impl BoxGlyphs {
    /// Light single-line box drawing.
    pub const LIGHT: Self = Self {
        horizontal: '─',
        vertical: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
    };
}

impl Default for BoxGlyphs {
    fn default() -> Self {
        Self::LIGHT
    }
}

/// Draw the perimeter of the rectangle spanned by `top_left` and `bottom_right`.
///
/// Edges are walked independently: the top and bottom rows cover
/// `top_left.x..bottom_right.x`, the left and right columns cover
/// `top_left.y..=bottom_right.y`, so all four corners are painted.
pub fn rectangle_outline(buffer: &mut GlyphBuffer, top_left: Point, bottom_right: Point, brush: Brush) {
    let bg = brush.bg_for(buffer);
    let (x0, y0, x1, y1) = (top_left.x, top_left.y, bottom_right.x, bottom_right.y);
    let (x_span, y_span) = (
        (i64::from(x0), i64::from(x1)),
        (i64::from(y0), i64::from(y1) + 1),
    );

    horizontal_run(buffer, y0, x_span, brush.glyph, brush.fg, bg);
    horizontal_run(buffer, y1, x_span, brush.glyph, brush.fg, bg);
    vertical_run(buffer, x0, y_span, brush.glyph, brush.fg, bg);
    vertical_run(buffer, x1, y_span, brush.glyph, brush.fg, bg);
}

/// Fill every cell with `top_left.x <= x < bottom_right.x` and
/// `top_left.y <= y < bottom_right.y`.
pub fn rectangle_filled(buffer: &mut GlyphBuffer, top_left: Point, bottom_right: Point, brush: Brush) {
    let bg = brush.bg_for(buffer);
    // Visiting only the on-buffer part gives the same result as clipping each cell.
    let area = Rect::from_corners(top_left, bottom_right).intersection(&buffer.bounds());
    for p in area.points() {
        plot(buffer, p, brush.glyph, brush.fg, bg);
    }
}

/// Draw a rectangle outline with box-drawing glyphs.
///
/// Edges use [`BoxGlyphs::LIGHT`]; the four corners get their own glyphs.
/// The brush glyph is ignored.
pub fn frame(buffer: &mut GlyphBuffer, top_left: Point, bottom_right: Point, brush: Brush) {
    frame_styled(buffer, top_left, bottom_right, brush, BoxGlyphs::LIGHT);
}

/// Draw a rectangle outline with a custom set of box-drawing glyphs.
pub fn frame_styled(buffer: &mut GlyphBuffer, top_left: Point, bottom_right: Point, brush: Brush, glyphs: BoxGlyphs) {
    let bg = brush.bg_for(buffer);
    let fg = brush.fg;
    let (x0, y0, x1, y1) = (top_left.x, top_left.y, bottom_right.x, bottom_right.y);

    let x_span = (i64::from(x0) + 1, i64::from(x1));
    let y_span = (i64::from(y0) + 1, i64::from(y1));

    horizontal_run(buffer, y0, x_span, glyphs.horizontal, fg, bg);
    horizontal_run(buffer, y1, x_span, glyphs.horizontal, fg, bg);
    vertical_run(buffer, x0, y_span, glyphs.vertical, fg, bg);
    vertical_run(buffer, x1, y_span, glyphs.vertical, fg, bg);

    plot(buffer, Point::new(x0, y0), glyphs.top_left, fg, bg);
    plot(buffer, Point::new(x1, y0), glyphs.top_right, fg, bg);
    plot(buffer, Point::new(x0, y1), glyphs.bottom_left, fg, bg);
    plot(buffer, Point::new(x1, y1), glyphs.bottom_right, fg, bg);
}

/// Draw grid lines every `spacing` cells.
///
/// Horizontal lines sit at `y = row * spacing` for
/// `row in top_left.y..bottom_right.y / spacing`, spanning
/// `top_left.x..=bottom_right.x`; vertical lines are the same with the
/// axes swapped.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSpacing`] if `spacing < 1`. Nothing is
/// drawn in that case.
pub fn grid(
    buffer: &mut GlyphBuffer,
    top_left: Point,
    bottom_right: Point,
    spacing: i32,
    brush: Brush,
) -> Result<(), ConfigError> {
    if spacing < 1 {
        return Err(ConfigError::InvalidSpacing(spacing));
    }

    let bg = brush.bg_for(buffer);
    let x_span = inclusive_span(top_left.x, bottom_right.x);
    let y_span = inclusive_span(top_left.y, bottom_right.y);

    for y in grid_positions(top_left.y, bottom_right.y, spacing, buffer.height()) {
        horizontal_run(buffer, y, x_span, brush.glyph, brush.fg, bg);
    }
    for x in grid_positions(top_left.x, bottom_right.x, spacing, buffer.width()) {
        vertical_run(buffer, x, y_span, brush.glyph, brush.fg, bg);
    }
    Ok(())
}

/// Line positions `row * spacing` for `row in from..to / spacing`, limited
/// to those landing in `0..len`.
fn grid_positions(from: i32, to: i32, spacing: i32, len: u16) -> impl Iterator<Item = i32> {
    let spacing = i64::from(spacing);
    // Smallest row whose line is >= 0, and one past the last below `len`.
    let first = i64::from(from).max(0);
    let end = (i64::from(to) / spacing).min((i64::from(len) + spacing - 1) / spacing);
    (first..end).filter_map(move |row| i32::try_from(row * spacing).ok())
}

/// The half-open span covering both `a` and `b`, whichever comes first.
fn inclusive_span(a: i32, b: i32) -> (i64, i64) {
    (i64::from(a.min(b)), i64::from(a.max(b)) + 1)
}

/// Clamp the half-open span `start..end` to `0..len`.
fn clamp_span((start, end): (i64, i64), len: u16) -> std::ops::Range<i32> {
    let len = i64::from(len);
    // Both ends land in 0..=len, which always fits in i32.
    let lo = i32::try_from(start.clamp(0, len)).unwrap_or(0);
    let hi = i32::try_from(end.clamp(0, len)).unwrap_or(0);
    lo..hi
}

/// Paint row `y` over the span, visiting only on-buffer cells.
fn horizontal_run(buffer: &mut GlyphBuffer, y: i32, span: (i64, i64), glyph: char, fg: u8, bg: u8) {
    if !(0..i32::from(buffer.height())).contains(&y) {
        return;
    }
    for x in clamp_span(span, buffer.width()) {
        plot(buffer, Point::new(x, y), glyph, fg, bg);
    }
}

/// Paint column `x` over the span, visiting only on-buffer cells.
fn vertical_run(buffer: &mut GlyphBuffer, x: i32, span: (i64, i64), glyph: char, fg: u8, bg: u8) {
    if !(0..i32::from(buffer.width())).contains(&x) {
        return;
    }
    for y in clamp_span(span, buffer.height()) {
        plot(buffer, Point::new(x, y), glyph, fg, bg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_painted(buffer: &GlyphBuffer) -> usize {
        buffer.cells().iter().filter(|c| !c.is_empty()).count()
    }

    fn ch_at(buffer: &GlyphBuffer, x: i32, y: i32) -> char {
        buffer.get(Point::new(x, y)).unwrap().ch()
    }

    #[test]
    fn test_rectangle_filled_is_half_open() {
        let mut buffer = GlyphBuffer::new(6, 6).unwrap();
        rectangle_filled(&mut buffer, Point::new(0, 0), Point::new(3, 3), Brush::new(2));
        assert_eq!(count_painted(&buffer), 9);
        for y in 0..3 {
            for x in 0..3 {
                assert!(!buffer.get(Point::new(x, y)).unwrap().is_empty());
            }
        }
        assert!(buffer.get(Point::new(3, 3)).unwrap().is_empty());
        assert!(buffer.get(Point::new(3, 0)).unwrap().is_empty());
        assert!(buffer.get(Point::new(0, 3)).unwrap().is_empty());
    }

    #[test]
    fn test_rectangle_filled_clips() {
        let mut buffer = GlyphBuffer::new(4, 4).unwrap();
        rectangle_filled(&mut buffer, Point::new(-10, 2), Point::new(100, 100), Brush::new(2));
        assert_eq!(count_painted(&buffer), 8);
    }

    #[test]
    fn test_rectangle_filled_inverted_is_empty() {
        let mut buffer = GlyphBuffer::new(4, 4).unwrap();
        rectangle_filled(&mut buffer, Point::new(3, 3), Point::new(1, 1), Brush::new(2));
        assert_eq!(count_painted(&buffer), 0);
    }

    #[test]
    fn test_rectangle_outline_perimeter() {
        let mut buffer = GlyphBuffer::new(8, 8).unwrap();
        rectangle_outline(&mut buffer, Point::new(1, 1), Point::new(4, 3), Brush::new(2));

        // 4 columns x 3 rows perimeter: 2*4 + 2*3 - 4 corners
        assert_eq!(count_painted(&buffer), 10);
        for p in [(1, 1), (4, 1), (1, 3), (4, 3), (2, 1), (4, 2), (1, 2), (3, 3)] {
            assert!(!buffer.get(Point::new(p.0, p.1)).unwrap().is_empty(), "{p:?}");
        }
        assert!(buffer.get(Point::new(2, 2)).unwrap().is_empty());
    }

    #[test]
    fn test_frame_glyphs() {
        let mut buffer = GlyphBuffer::new(6, 5).unwrap();
        frame(&mut buffer, Point::new(0, 0), Point::new(4, 3), Brush::new(7));

        assert_eq!(ch_at(&buffer, 0, 0), '┌');
        assert_eq!(ch_at(&buffer, 4, 0), '┐');
        assert_eq!(ch_at(&buffer, 0, 3), '└');
        assert_eq!(ch_at(&buffer, 4, 3), '┘');
        for x in 1..4 {
            assert_eq!(ch_at(&buffer, x, 0), '─');
            assert_eq!(ch_at(&buffer, x, 3), '─');
        }
        for y in 1..3 {
            assert_eq!(ch_at(&buffer, 0, y), '│');
            assert_eq!(ch_at(&buffer, 4, y), '│');
        }
        assert!(buffer.get(Point::new(2, 2)).unwrap().is_empty());
        assert_eq!(buffer.get(Point::new(0, 0)).unwrap().fg(), 7);
    }

    #[test]
    fn test_frame_styled_custom_glyphs() {
        let ascii = BoxGlyphs {
            horizontal: '-',
            vertical: '|',
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
        };
        let mut buffer = GlyphBuffer::new(3, 3).unwrap();
        frame_styled(&mut buffer, Point::new(0, 0), Point::new(2, 2), Brush::new(1), ascii);
        assert_eq!(buffer.snapshot(0).to_text(), "+-+\n| |\n+-+\n");
    }

    #[test]
    fn test_grid_rejects_zero_spacing() {
        let mut buffer = GlyphBuffer::new(10, 10).unwrap();
        assert_eq!(
            grid(&mut buffer, Point::new(0, 0), Point::new(9, 9), 0, Brush::new(1)),
            Err(ConfigError::InvalidSpacing(0))
        );
        assert_eq!(
            grid(&mut buffer, Point::new(0, 0), Point::new(9, 9), -2, Brush::new(1)),
            Err(ConfigError::InvalidSpacing(-2))
        );
        assert_eq!(count_painted(&buffer), 0);
    }

    #[test]
    fn test_grid_lines() {
        let mut buffer = GlyphBuffer::new(11, 11).unwrap();
        grid(&mut buffer, Point::new(0, 0), Point::new(10, 10), 5, Brush::new(1)).unwrap();

        // Lines at 0 and 5 on each axis, each 11 cells long.
        for i in 0..=10 {
            assert!(!buffer.get(Point::new(i, 0)).unwrap().is_empty());
            assert!(!buffer.get(Point::new(i, 5)).unwrap().is_empty());
            assert!(!buffer.get(Point::new(0, i)).unwrap().is_empty());
            assert!(!buffer.get(Point::new(5, i)).unwrap().is_empty());
        }
        assert!(buffer.get(Point::new(10, 10)).unwrap().is_empty());
        assert_eq!(count_painted(&buffer), 11 * 4 - 4);
    }

    #[test]
    fn test_grid_positions_are_multiples_of_spacing() {
        let mut buffer = GlyphBuffer::new(25, 25).unwrap();
        grid(&mut buffer, Point::new(2, 2), Point::new(20, 20), 5, Brush::new(1)).unwrap();

        // Rows 2..4 of spacing 5: lines at 10 and 15, spanning 2..=20.
        let rows: Vec<i32> = (0..25).filter(|&y| !ch_at_empty(&buffer, 3, y)).collect();
        let cols: Vec<i32> = (0..25).filter(|&x| !ch_at_empty(&buffer, x, 3)).collect();
        assert_eq!(rows, vec![10, 15]);
        assert_eq!(cols, vec![10, 15]);

        for i in 2..=20 {
            assert!(!ch_at_empty(&buffer, i, 10));
            assert!(!ch_at_empty(&buffer, 15, i));
        }
        assert!(ch_at_empty(&buffer, 1, 10));
        assert!(ch_at_empty(&buffer, 21, 10));
        assert!(ch_at_empty(&buffer, 10, 21));
        assert_eq!(count_painted(&buffer), 19 * 4 - 4);
    }

    #[test]
    fn test_grid_far_corners_clip_to_buffer() {
        let mut buffer = GlyphBuffer::new(10, 10).unwrap();
        grid(
            &mut buffer,
            Point::new(-1_000_000_000, -1_000_000_000),
            Point::new(1_000_000_000, 1_000_000_000),
            4,
            Brush::new(1),
        )
        .unwrap();

        // Lines at 0, 4 and 8 on both axes, full length.
        for i in 0..10 {
            for at in [0, 4, 8] {
                assert!(!ch_at_empty(&buffer, i, at));
                assert!(!ch_at_empty(&buffer, at, i));
            }
        }
        assert_eq!(count_painted(&buffer), 10 * 6 - 9);
    }

    #[test]
    fn test_rectangle_outline_far_corners_clip_to_buffer() {
        let mut buffer = GlyphBuffer::new(10, 10).unwrap();
        rectangle_outline(
            &mut buffer,
            Point::new(-1_000_000_000, 0),
            Point::new(1_000_000_000, 5),
            Brush::new(2),
        );

        // Only the top and bottom edges cross the buffer.
        assert_eq!(count_painted(&buffer), 20);
        for x in 0..10 {
            assert!(!ch_at_empty(&buffer, x, 0));
            assert!(!ch_at_empty(&buffer, x, 5));
        }

        buffer.clear();
        rectangle_outline(
            &mut buffer,
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MAX),
            Brush::new(2),
        );
        assert_eq!(count_painted(&buffer), 0);
    }

    #[test]
    fn test_frame_far_corners_clip_to_buffer() {
        let mut buffer = GlyphBuffer::new(6, 6).unwrap();
        frame(
            &mut buffer,
            Point::new(2, -1_000_000_000),
            Point::new(1_000_000_000, 3),
            Brush::new(7),
        );

        // Left edge at x = 2 down to the bottom edge at y = 3.
        for y in 0..3 {
            assert_eq!(ch_at(&buffer, 2, y), '│');
        }
        assert_eq!(ch_at(&buffer, 2, 3), '└');
        for x in 3..6 {
            assert_eq!(ch_at(&buffer, x, 3), '─');
        }
        assert_eq!(count_painted(&buffer), 7);
    }

    fn ch_at_empty(buffer: &GlyphBuffer, x: i32, y: i32) -> bool {
        buffer.get(Point::new(x, y)).unwrap().is_empty()
    }
}
