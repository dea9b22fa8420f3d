//! Single cells and straight lines.

use super::{narrow, plot, Brush};
use crate::buffer::GlyphBuffer;
use crate::geometry::Point;

/// Write one cell.
#[inline]
pub fn pixel(buffer: &mut GlyphBuffer, pos: Point, brush: Brush) {
    let bg = brush.bg_for(buffer);
    plot(buffer, pos, brush.glyph, brush.fg, bg);
}

/// Draw a line from `a` to `b`, both endpoints included.
///
/// Integer Bresenham stepping: the axis with the larger absolute delta
/// drives, the error accumulates along the other one. Exactly
/// `max(|dx|, |dy|) + 1` cells are visited; `a == b` draws a single cell.
///
/// Steps whose driving coordinate falls outside the buffer are skipped
/// arithmetically, so the cost is bounded by the buffer size rather than
/// the distance between the endpoints.
pub fn line(buffer: &mut GlyphBuffer, a: Point, b: Point, brush: Brush) {
    let bg = brush.bg_for(buffer);

    // Wide arithmetic so extreme endpoints cannot overflow the deltas.
    let dx = i64::from(b.x) - i64::from(a.x);
    let dy = i64::from(b.y) - i64::from(a.y);
    let x_drives = dx.abs() > dy.abs();

    // (start, step) along the driving axis, then along the other one.
    let (major, minor, major_len) = if x_drives {
        ((i64::from(a.x), dx.signum()), (i64::from(a.y), dy.signum()), buffer.width())
    } else {
        ((i64::from(a.y), dy.signum()), (i64::from(a.x), dx.signum()), buffer.height())
    };
    let longest = dx.abs().max(dy.abs());
    let shortest = dx.abs().min(dy.abs());

    let Some((first, last)) = visible_steps(major.0, major.1, longest, major_len) else {
        return;
    };

    // Jump straight to step `first`: each step adds `shortest` to the
    // numerator and moves the minor axis once per `longest` accumulated.
    let (mut numerator, jumps) = if longest == 0 {
        (0, 0)
    } else {
        let total = i128::from(longest >> 1) + i128::from(first) * i128::from(shortest);
        let wide = i128::from(longest);
        // Remainder is below `longest` and quotient at most `first + 1`.
        (
            i64::try_from(total % wide).unwrap_or(0),
            i64::try_from(total / wide).unwrap_or(i64::MAX),
        )
    };

    let mut m = major.0 + first * major.1;
    let mut n = minor.0.saturating_add(jumps.saturating_mul(minor.1));
    for _ in first..=last {
        let (x, y) = if x_drives { (m, n) } else { (n, m) };
        if let Some(p) = narrow(x, y) {
            plot(buffer, p, brush.glyph, brush.fg, bg);
        }
        numerator += shortest;
        if numerator >= longest {
            numerator -= longest;
            n += minor.1;
        }
        m += major.1;
    }
}

/// The range of steps `i in 0..=longest` whose driving coordinate
/// `start + i * step` lies in `0..len`, or `None` if there are none.
fn visible_steps(start: i64, step: i64, longest: i64, len: u16) -> Option<(i64, i64)> {
    let last_cell = i64::from(len) - 1;
    let (lo, hi) = match step {
        0 => (0, if (0..=last_cell).contains(&start) { 0 } else { -1 }),
        1 => ((-start).max(0), (last_cell - start).min(longest)),
        _ => ((start - last_cell).max(0), start.min(longest)),
    };
    (lo <= hi).then_some((lo, hi))
}
