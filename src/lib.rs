//! # Glyphwork
//!
//! A character-cell rendering engine for console graphics.
//!
//! Glyphwork draws into an off-screen grid of glyph cells, each holding a
//! character plus foreground and background indices into a 16-color
//! palette. Presentation to a device is a separate, replaceable step.
//!
//! ## Core Concepts
//!
//! - **Glyph buffer**: A fixed-size grid; every write is clipped, never fails
//! - **Palette**: Up to 16 RGB colors, swapped atomically
//! - **Rasterizer**: Lines, rectangles, frames, grids, arcs and triangles
//!   as free functions over a buffer
//! - **Block text**: FIGlet fonts laid out glyph by glyph
//! - **Snapshot**: A frame with the default background filled in, handed
//!   to a [`Surface`]
//!
//! ## Example
//!
//! ```
//! use glyphwork::{raster, Brush, Point, Session, Shade};
//!
//! let mut session = Session::new(10, 5).unwrap();
//! let brush = Brush::new(14).with_shade(Shade::Medium);
//! raster::rectangle_filled(session.buffer_mut(), Point::new(1, 1), Point::new(4, 3), brush);
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.cells().len(), 50);
//! assert_eq!(snapshot.get(Point::new(2, 2)).unwrap().ch(), '▒');
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod raster;
pub mod session;
pub mod surface;
pub mod text;

// Re-exports for convenience
pub use buffer::{Cell, GlyphBuffer, Shade, Snapshot, EMPTY_CHAR};
pub use config::{SessionConfig, SurfaceConfig};
pub use error::{ConfigError, Error, IndexError, PaletteError, Result};
pub use geometry::{Point, Rect};
pub use palette::{Palette, Rgb, DEFAULT_COLORS};
pub use raster::Brush;
pub use session::Session;
pub use surface::{AnsiSurface, Surface, TerminalSurface};
pub use text::{layout, BlockFont, FigletFont, LaidGlyph};
