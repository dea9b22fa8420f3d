//! Buffer module: The glyph grid the rasterizer draws into.
//!
//! This module contains:
//! - [`Cell`]: A character plus foreground/background palette indices
//! - [`GlyphBuffer`]: A fixed-size grid of cells with a default background
//! - [`Snapshot`]: The presentation-ready copy of a buffer
//! - [`Shade`]: Block glyph styles

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
mod snapshot;

pub use buffer::GlyphBuffer;
pub use cell::{Cell, Shade, EMPTY_CHAR};
pub use snapshot::Snapshot;
