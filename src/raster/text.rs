//! Single-row text and block-font text.

use super::{narrow, plot, Brush};
use crate::buffer::GlyphBuffer;
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::text::{layout, BlockFont};

/// Place `s` left to right on row `pos.y`, one cell per character.
///
/// There is no wrapping; characters past the right edge are clipped. The
/// brush glyph is ignored.
pub fn text(buffer: &mut GlyphBuffer, pos: Point, s: &str, brush: Brush) {
    let bg = brush.bg_for(buffer);
    let width = i64::from(buffer.width());
    for (i, ch) in (0_i64..).zip(s.chars()) {
        let x = i64::from(pos.x) + i;
        if x >= width {
            break;
        }
        if let Some(p) = narrow(x, i64::from(pos.y)) {
            plot(buffer, p, ch, brush.fg, bg);
        }
    }
}

/// Render `s` in a block font with its top-left corner at `pos`.
///
/// Space characters inside glyph fragments are transparent: they leave the
/// underlying cells untouched.
///
/// # Errors
///
/// Returns [`ConfigError::NonAsciiInput`] if `s` is not ASCII. Nothing is
/// drawn in that case.
pub fn block_text<F: BlockFont + ?Sized>(
    buffer: &mut GlyphBuffer,
    pos: Point,
    font: &F,
    s: &str,
    brush: Brush,
) -> Result<(), ConfigError> {
    let glyphs = layout(font, s)?;
    let bg = brush.bg_for(buffer);
    for g in glyphs {
        let x = i64::from(pos.x) + i64::try_from(g.col).unwrap_or(i64::MAX);
        let y = i64::from(pos.y) + i64::try_from(g.row).unwrap_or(i64::MAX);
        if let Some(p) = narrow(x, y) {
            plot(buffer, p, g.ch, brush.fg, bg);
        }
    }
    Ok(())
}
