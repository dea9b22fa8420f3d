//! Polar-sampled arcs and pie wedges.
//!
//! Both shapes sample one point per integer degree rather than running a
//! true circle rasterizer. At large radii neighbouring samples land more
//! than one cell apart and leave gaps in the curve.

use super::{narrow, plot, Brush};
use crate::buffer::GlyphBuffer;
use crate::geometry::Point;

/// The cell offset of the polar point (`radius`, `degrees`), rounded to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn polar(radius: i32, degrees: i64) -> (i64, i64) {
    // Degrees are reduced first so the f64 conversion is exact.
    let rad = ((degrees % 360) as f64).to_radians();
    let r = f64::from(radius);
    ((r * rad.cos()).round() as i64, (r * rad.sin()).round() as i64)
}

/// Draw an arc of `radius` around `center`, sampled at every integer degree
/// in `0..arc_degrees`.
///
/// `arc_degrees = 360` gives a full circle; values `<= 0` draw nothing.
pub fn arc(buffer: &mut GlyphBuffer, center: Point, radius: i32, arc_degrees: i32, brush: Brush) {
    let bg = brush.bg_for(buffer);
    for deg in 0..i64::from(arc_degrees) {
        let (dx, dy) = polar(radius, deg);
        if let Some(p) = narrow(i64::from(center.x) + dx, i64::from(center.y) + dy) {
            plot(buffer, p, brush.glyph, brush.fg, bg);
        }
    }
}

/// Fill a pie wedge by radial sweep.
///
/// For each integer degree counting down from `start_degrees` for
/// `arc_degrees` steps, every radius `0..=radius` is plotted.
pub fn semi_circle_filled(
    buffer: &mut GlyphBuffer,
    center: Point,
    radius: i32,
    start_degrees: i32,
    arc_degrees: i32,
    brush: Brush,
) {
    let bg = brush.bg_for(buffer);
    let start = i64::from(start_degrees);
    let end = start - i64::from(arc_degrees);

    let mut deg = start;
    while deg > end {
        for r in 0..=radius {
            let (dx, dy) = polar(r, deg);
            if let Some(p) = narrow(i64::from(center.x) + dx, i64::from(center.y) + dy) {
                plot(buffer, p, brush.glyph, brush.fg, bg);
            }
        }
        deg -= 1;
    }
}
