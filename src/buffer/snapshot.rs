//! Snapshot: A read-only materialization of the buffer for presentation.

use super::cell::Cell;
use crate::error::IndexError;
use crate::geometry::Point;
use crate::palette::validate_index;

/// A width × height grid of cells, row-major, ready to present.
///
/// Empty cells already carry the default background chosen when the
/// snapshot was taken.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Snapshot {
    /// An all-empty snapshot of the given size.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::EMPTY; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Copy `cells` in, substituting `background` for empty cells.
    ///
    /// Reuses the existing allocation when the size matches.
    pub(crate) fn fill_from(&mut self, width: u16, height: u16, cells: &[Cell], background: u8) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.extend(cells.iter().map(|c| {
            if c.is_empty() {
                c.with_bg(background)
            } else {
                *c
            }
        }));
    }

    /// Width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `pos`, if in range.
    #[inline]
    pub fn get(&self, pos: Point) -> Option<&Cell> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        if x < self.width as usize && y < self.height as usize {
            self.cells.get(y * self.width as usize + x)
        } else {
            None
        }
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Check every cell's indices against the palette range.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range index found, scanning row-major and
    /// checking foreground before background.
    pub fn validate(&self) -> Result<(), IndexError> {
        for cell in &self.cells {
            validate_index(cell.fg())?;
            validate_index(cell.bg())?;
        }
        Ok(())
    }

    /// Render the characters as plain text, one line per row.
    ///
    /// Empty cells become spaces.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|c| if c.is_empty() { ' ' } else { c.ch() }));
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
