//! Brush: Per-call style for rasterizer operations.

use crate::buffer::{GlyphBuffer, Shade};

/// Foreground index, optional background index and glyph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Brush {
    /// Foreground palette index.
    pub fg: u8,
    /// Background palette index; `None` means the buffer's default background.
    pub bg: Option<u8>,
    /// Character written to each covered cell.
    pub glyph: char,
}

impl Brush {
    /// A full-block brush in `fg` over the default background.
    #[inline]
    pub const fn new(fg: u8) -> Self {
        Self {
            fg,
            bg: None,
            glyph: Shade::Full.glyph(),
        }
    }

    /// Set an explicit background index (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: u8) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Set the glyph character (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Set the glyph from a shade (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_shade(mut self, shade: Shade) -> Self {
        self.glyph = shade.glyph();
        self
    }

    /// The background to write into `buffer`.
    #[inline]
    pub const fn bg_for(&self, buffer: &GlyphBuffer) -> u8 {
        match self.bg {
            Some(bg) => bg,
            None => buffer.background(),
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(15)
    }
}
