//! Layout: Convert a string into positioned block-font characters.

use crate::error::ConfigError;

/// What the layout needs from a loaded block font.
pub trait BlockFont {
    /// Number of rows every character occupies.
    fn height(&self) -> usize;

    /// The fragment of `ch` on `row` (0-based), trailing spaces included.
    ///
    /// Characters the font lacks return an empty fragment.
    fn fragment(&self, ch: char, row: usize) -> &str;

    /// Total width of `text` in cells, measured on the first row.
    fn width(&self, text: &str) -> usize {
        text.chars()
            .map(|ch| self.fragment(ch, 0).chars().count())
            .sum()
    }
}

/// One visible character of laid-out block text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LaidGlyph {
    /// Row offset from the top of the text.
    pub row: usize,
    /// Column offset from the left of the text.
    pub col: usize,
    /// Character to draw.
    pub ch: char,
}

/// Lay out `text` in `font`.
///
/// For each font row, the input characters are walked left to right with a
/// running column offset. Non-space fragment characters are emitted at that
/// offset, then the offset advances by the fragment's full width (trailing
/// spaces included) so the next character is kerned correctly.
///
/// # Errors
///
/// Returns [`ConfigError::NonAsciiInput`] if `text` contains any non-ASCII
/// character.
pub fn layout<F: BlockFont + ?Sized>(font: &F, text: &str) -> Result<Vec<LaidGlyph>, ConfigError> {
    if !text.is_ascii() {
        return Err(ConfigError::NonAsciiInput);
    }

    let mut out = Vec::new();
    for row in 0..font.height() {
        let mut col = 0;
        for ch in text.chars() {
            let fragment = font.fragment(ch, row);
            let mut width = 0;
            for (i, f) in fragment.chars().enumerate() {
                if f != ' ' {
                    out.push(LaidGlyph { row, col: col + i, ch: f });
                }
                width = i + 1;
            }
            col += width;
        }
    }
    Ok(out)
}
