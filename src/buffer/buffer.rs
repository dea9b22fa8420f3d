//! `GlyphBuffer`: A fixed-size grid of glyph cells.
//!
//! The buffer uses contiguous memory allocation for cache efficiency.
//! Cells are stored in row-major order. The backing storage is sized once
//! at construction and never reallocated.

use super::cell::Cell;
use super::snapshot::Snapshot;
use crate::error::{ConfigError, IndexError};
use crate::geometry::{Point, Rect};
use crate::palette::validate_index;
use log::trace;

/// A grid of glyph cells plus the default background index.
///
/// Access is in row-major order: `index = y * width + x`.
///
/// The buffer assumes a single owner thread. It does no internal locking.
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphBuffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
    /// Background index substituted for empty cells at snapshot time.
    background: u8,
}

impl GlyphBuffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// All cells start empty and the default background is index 0.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] if width or height is 0.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
            background: 0,
        })
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The buffer's extent as a rectangle at the origin.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The default background index.
    #[inline]
    pub const fn background(&self) -> u8 {
        self.background
    }

    /// Set the default background index.
    ///
    /// This rewrites nothing: empty cells pick it up at snapshot time.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::IndexOutOfRange`] if `index >= 16`.
    pub fn set_background(&mut self, index: u8) -> Result<(), IndexError> {
        self.background = validate_index(index)?;
        Ok(())
    }

    /// Convert a position to a linear index.
    ///
    /// Returns `None` if the position is out of bounds.
    #[inline]
    pub fn index_of(&self, pos: Point) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        if x < self.width as usize && y < self.height as usize {
            Some(y * (self.width as usize) + x)
        } else {
            None
        }
    }

    /// Get a reference to the cell at `pos`.
    ///
    /// Returns `None` if the position is out of bounds.
    #[inline]
    pub fn get(&self, pos: Point) -> Option<&Cell> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    /// Write a cell at `pos`, last writer wins.
    ///
    /// Returns `false` (and changes nothing) if `pos` is out of bounds.
    #[inline]
    pub fn set(&mut self, pos: Point, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(pos) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Write a character and color pair at `pos`.
    ///
    /// Out-of-range positions are ignored.
    #[inline]
    pub fn set_cell(&mut self, pos: Point, ch: char, fg: u8, bg: u8) {
        if let Some(idx) = self.index_of(pos) {
            self.cells[idx].set(ch, fg, bg);
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        trace!("clearing {}x{} glyph buffer", self.width, self.height);
        self.cells.fill(Cell::EMPTY);
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Materialize the buffer for presentation.
    ///
    /// Empty cells take `background` as their background index in the
    /// snapshot; stored cells are not rewritten. An empty cell painted with
    /// an explicit background is indistinguishable from an untouched one
    /// and is overridden too.
    pub fn snapshot(&self, background: u8) -> Snapshot {
        let mut snapshot = Snapshot::with_size(self.width, self.height);
        self.snapshot_into(background, &mut snapshot);
        snapshot
    }

    /// Like [`snapshot`](Self::snapshot), reusing `out`'s allocation.
    pub fn snapshot_into(&self, background: u8, out: &mut Snapshot) {
        out.fill_from(self.width, self.height, &self.cells, background);
    }
}

impl std::fmt::Debug for GlyphBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}
