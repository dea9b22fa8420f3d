//! Raster module: Stateless shape rasterization onto a [`GlyphBuffer`].
//!
//! Every function here is a free function over `&mut GlyphBuffer`. None of
//! them keeps a reference past the call, and every write goes through
//! [`GlyphBuffer::set_cell`], so shapes running off any edge are clipped
//! cell by cell instead of failing.
//!
//! Style arguments (foreground, optional background, glyph) are bundled in
//! a [`Brush`]. A brush without a background uses the buffer's default
//! background at draw time.
//!
//! # Example
//!
//! ```
//! use glyphwork::{raster, Brush, GlyphBuffer, Point};
//!
//! let mut buffer = GlyphBuffer::new(20, 10).unwrap();
//! raster::line(&mut buffer, Point::new(0, 0), Point::new(4, 0), Brush::new(12));
//! assert_eq!(buffer.get(Point::new(4, 0)).unwrap().fg(), 12);
//! ```

mod arc;
mod brush;
mod line;
mod rect;
mod text;
mod triangle;

pub use arc::{arc, semi_circle_filled};
pub use brush::Brush;
pub use line::{line, pixel};
pub use rect::{frame, frame_styled, grid, rectangle_filled, rectangle_outline, BoxGlyphs};
pub use text::{block_text, text};
pub use triangle::{edge_function, triangle_filled, triangle_outline};

use crate::buffer::GlyphBuffer;
use crate::geometry::Point;

/// Write one cell with a resolved brush, clipping out-of-range positions.
#[inline]
fn plot(buffer: &mut GlyphBuffer, pos: Point, glyph: char, fg: u8, bg: u8) {
    buffer.set_cell(pos, glyph, fg, bg);
}

/// Narrow an intermediate wide coordinate back to buffer space.
///
/// Values that do not fit in `i32` are necessarily off-buffer, so they are
/// dropped.
#[inline]
fn narrow(x: i64, y: i64) -> Option<Point> {
    Some(Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}
