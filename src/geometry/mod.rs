//! Geometry module: Integer coordinates in buffer space.
//!
//! Coordinates are signed so shapes may extend past any edge of the
//! buffer; the rasterizer clips them cell by cell.

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;
