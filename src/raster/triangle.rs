//! Triangles: outline and half-space fill.

use super::{line, plot, Brush};
use crate::buffer::GlyphBuffer;
use crate::geometry::{Point, Rect};

/// Twice the signed area of the triangle (a, b, p).
///
/// Positive when `p` lies to the right of `a → b` in y-down coordinates
/// (i.e. the three points wind clockwise on screen).
#[inline]
pub fn edge_function(a: Point, b: Point, p: Point) -> i64 {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    let (px, py) = (i64::from(p.x), i64::from(p.y));
    (bx - ax) * (py - ay) - (by - ay) * (px - ax)
}

/// Draw the three edges `p0 → p1 → p2 → p0`.
pub fn triangle_outline(buffer: &mut GlyphBuffer, p0: Point, p1: Point, p2: Point, brush: Brush) {
    line(buffer, p0, p1, brush);
    line(buffer, p1, p2, brush);
    line(buffer, p2, p0, brush);
}

/// Fill a triangle using the edge-function test.
///
/// Every cell `p` in the (inclusive) bounding box is filled when
/// `edge(p1, p2, p)`, `edge(p2, p0, p)` and `edge(p0, p1, p)` are all
/// `>= 0`. The test depends on winding: vertices must run clockwise on
/// screen (y down). Counter-clockwise input fills nothing; winding is not
/// normalized.
pub fn triangle_filled(buffer: &mut GlyphBuffer, p0: Point, p1: Point, p2: Point, brush: Brush) {
    let bg = brush.bg_for(buffer);
    let area = Rect::bounding(&[p0, p1, p2]).intersection(&buffer.bounds());

    for p in area.points() {
        let w0 = edge_function(p1, p2, p);
        let w1 = edge_function(p2, p0, p);
        let w2 = edge_function(p0, p1, p);
        if w0 >= 0 && w1 >= 0 && w2 >= 0 {
            plot(buffer, p, brush.glyph, brush.fg, bg);
        }
    }
}
