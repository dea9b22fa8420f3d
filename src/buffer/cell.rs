//! Cell: The atomic unit of the glyph buffer.
//!
//! A cell is a character plus two palette indices. It carries no RGB data;
//! colors are resolved through the [`Palette`](crate::Palette) only when a
//! snapshot is presented.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  Cell Layout (8 bytes)               │
//! ├─────────────┬──────────┬─────────────┤
//! │  character  │    fg    │     bg      │
//! │  char (4b)  │  u8 (1b) │  u8 (1b)    │
//! └─────────────┴──────────┴─────────────┘
//! ```

/// The "no character" sentinel. Cells holding it are *empty*.
pub const EMPTY_CHAR: char = '\0';

/// Block glyphs of decreasing density.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Shade {
    /// Fully opaque block `█`.
    #[default]
    Full,
    /// Dark shade `▓`.
    Dark,
    /// Medium shade `▒`.
    Medium,
    /// Light shade `░`.
    Light,
}

impl Shade {
    /// The character drawn for this shade.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Full => '\u{2588}',
            Self::Dark => '\u{2593}',
            Self::Medium => '\u{2592}',
            Self::Light => '\u{2591}',
        }
    }
}

impl From<Shade> for char {
    #[inline]
    fn from(shade: Shade) -> Self {
        shade.glyph()
    }
}

/// A single glyph cell.
///
/// Color indices are stored as given. Range checking against the palette
/// happens at presentation time, never at draw time.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Displayed character, or [`EMPTY_CHAR`].
    ch: char,
    /// Foreground palette index.
    fg: u8,
    /// Background palette index.
    bg: u8,
}

const _: () = assert!(
    std::mem::size_of::<Cell>() == 8,
    "Cell must stay 8 bytes"
);

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell: no character, indices 0.
    pub const EMPTY: Self = Self {
        ch: EMPTY_CHAR,
        fg: 0,
        bg: 0,
    };

    /// Create a cell.
    #[inline]
    pub const fn new(ch: char, fg: u8, bg: u8) -> Self {
        Self { ch, fg, bg }
    }

    /// The character.
    #[inline]
    pub const fn ch(&self) -> char {
        self.ch
    }

    /// Foreground index.
    #[inline]
    pub const fn fg(&self) -> u8 {
        self.fg
    }

    /// Background index.
    #[inline]
    pub const fn bg(&self) -> u8 {
        self.bg
    }

    /// Whether the cell holds no character.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.ch == EMPTY_CHAR
    }

    /// Overwrite all three fields.
    #[inline]
    pub const fn set(&mut self, ch: char, fg: u8, bg: u8) {
        self.ch = ch;
        self.fg = fg;
        self.bg = bg;
    }

    /// Set the background index (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: u8) -> Self {
        self.bg = bg;
        self
    }

    /// Reset to [`Cell::EMPTY`].
    #[inline]
    pub const fn reset(&mut self) {
        *self = Self::EMPTY;
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("ch", &self.ch)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size() {
        assert_eq!(std::mem::size_of::<Cell>(), 8);
    }

    #[test]
    fn test_cell_default_is_empty() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.fg(), 0);
        assert_eq!(cell.bg(), 0);
    }

    #[test]
    fn test_cell_set_and_reset() {
        let mut cell = Cell::EMPTY;
        cell.set('x', 4, 9);
        assert_eq!(cell, Cell::new('x', 4, 9));
        assert!(!cell.is_empty());

        cell.reset();
        assert_eq!(cell, Cell::EMPTY);
    }

    #[test]
    fn test_shade_glyphs() {
        assert_eq!(char::from(Shade::Full), '█');
        assert_eq!(Shade::Dark.glyph(), '▓');
        assert_eq!(Shade::Medium.glyph(), '▒');
        assert_eq!(Shade::Light.glyph(), '░');
        assert_eq!(Shade::default(), Shade::Full);
    }
}
