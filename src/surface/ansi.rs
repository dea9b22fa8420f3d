//! ANSI surface: Turn snapshots into 24-bit color escape sequences.
//!
//! Frames are either redrawn in full or, when the previous frame is known
//! and comparable, diffed against it so only changed cells are emitted.
//! Cursor position and the last emitted colors are tracked to skip
//! redundant sequences. Each frame reaches the writer in one `write_all`.

use super::output::OutputBuffer;
use super::Surface;
use crate::buffer::{Cell, Snapshot};
use crate::error::Error;
use crate::palette::{Palette, Rgb};
use log::{trace, warn};
use std::io::Write;

/// What the terminal is believed to be showing right now.
#[derive(Debug, Clone, Copy)]
struct CursorState {
    x: u16,
    y: u16,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl CursorState {
    const fn unknown() -> Self {
        Self {
            x: u16::MAX,
            y: u16::MAX,
            fg: None,
            bg: None,
        }
    }
}

/// Statistics about the most recent frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitStats {
    /// Whether the whole screen was redrawn.
    pub full_redraw: bool,
    /// Number of cells written.
    pub cells_written: usize,
    /// Number of cursor move sequences emitted.
    pub cursor_moves: usize,
    /// Number of color change sequences emitted.
    pub color_changes: usize,
}

/// A [`Surface`] writing ANSI escape sequences to any writer.
pub struct AnsiSurface<W: Write> {
    writer: W,
    output: OutputBuffer,
    state: CursorState,
    /// The last frame written, for diffing.
    previous: Option<Snapshot>,
    incremental: bool,
    /// Palette revision the previous frame was drawn with.
    palette_revision: Option<u64>,
    last_stats: EmitStats,
}

impl<W: Write> AnsiSurface<W> {
    /// Create an incremental surface over `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            output: OutputBuffer::new(),
            state: CursorState::unknown(),
            previous: None,
            incremental: true,
            palette_revision: None,
            last_stats: EmitStats::default(),
        }
    }

    /// Enable or disable diffing against the previous frame.
    #[must_use]
    pub const fn with_incremental(mut self, incremental: bool) -> Self {
        self.incremental = incremental;
        self
    }

    /// Whether diffing is enabled.
    #[inline]
    pub const fn is_incremental(&self) -> bool {
        self.incremental
    }

    /// Forget the previous frame so the next one is redrawn in full.
    ///
    /// Call this after anything else has written to the device.
    pub fn invalidate(&mut self) {
        self.previous = None;
        self.state = CursorState::unknown();
    }

    /// Statistics about the most recent frame.
    #[inline]
    pub const fn last_stats(&self) -> EmitStats {
        self.last_stats
    }

    /// The underlying writer.
    #[inline]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// The underlying writer, mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the surface, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn needs_full_redraw(&self, snapshot: &Snapshot, palette: &Palette) -> bool {
        if !self.incremental || self.palette_revision != Some(palette.revision()) {
            return true;
        }
        self.previous.as_ref().map_or(true, |prev| {
            prev.width() != snapshot.width() || prev.height() != snapshot.height()
        })
    }
}

impl<W: Write> Surface for AnsiSurface<W> {
    fn present(&mut self, snapshot: &Snapshot, palette: &Palette) -> Result<(), Error> {
        if let Err(e) = snapshot.validate() {
            warn!("refusing to present frame: {e}");
            return Err(e.into());
        }

        let full = self.needs_full_redraw(snapshot, palette);
        let mut stats = EmitStats {
            full_redraw: full,
            ..EmitStats::default()
        };

        self.output.clear();
        if full {
            self.output.reset_attrs();
            self.output.clear_screen();
            self.state = CursorState::unknown();
        }

        let width = snapshot.width();
        let previous = if full { None } else { self.previous.as_ref() };
        let mut index = 0;
        for (y, row) in (0..snapshot.height()).zip(snapshot.rows()) {
            for (x, cell) in (0..width).zip(row) {
                let unchanged = previous.is_some_and(|prev| prev.cells()[index] == *cell);
                index += 1;
                if unchanged {
                    continue;
                }
                emit_cell(
                    &mut self.output,
                    &mut self.state,
                    &mut stats,
                    (x, y),
                    *cell,
                    palette,
                )?;
            }
        }

        if !self.output.is_empty() {
            self.output.flush_to(&mut self.writer)?;
        }

        match &mut self.previous {
            Some(prev) => prev.clone_from(snapshot),
            None => self.previous = Some(snapshot.clone()),
        }
        self.palette_revision = Some(palette.revision());
        self.last_stats = stats;

        trace!(
            "frame: {} cells, {} moves, {} color changes, {} bytes",
            stats.cells_written,
            stats.cursor_moves,
            stats.color_changes,
            self.output.len()
        );
        Ok(())
    }
}

impl<W: Write> std::fmt::Debug for AnsiSurface<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnsiSurface")
            .field("incremental", &self.incremental)
            .field("last_stats", &self.last_stats)
            .finish_non_exhaustive()
    }
}

/// Write one cell, moving the cursor and switching colors only when needed.
fn emit_cell(
    output: &mut OutputBuffer,
    state: &mut CursorState,
    stats: &mut EmitStats,
    (x, y): (u16, u16),
    cell: Cell,
    palette: &Palette,
) -> Result<(), Error> {
    let fg = palette.resolve(cell.fg())?;
    let bg = palette.resolve(cell.bg())?;

    if state.x != x || state.y != y {
        output.cursor_move(x, y);
        stats.cursor_moves += 1;
    }
    if state.fg != Some(fg) {
        output.set_fg(fg);
        state.fg = Some(fg);
        stats.color_changes += 1;
    }
    if state.bg != Some(bg) {
        output.set_bg(bg);
        state.bg = Some(bg);
        stats.color_changes += 1;
    }

    let ch = if cell.is_empty() { ' ' } else { cell.ch() };
    output.write_char(ch);
    stats.cells_written += 1;

    // Terminals disagree on how far non-ASCII glyphs advance.
    state.y = y;
    state.x = if ch.is_ascii() { x.saturating_add(1) } else { u16::MAX };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::GlyphBuffer;
    use crate::error::IndexError;
    use crate::geometry::Point;

    fn written(surface: &AnsiSurface<Vec<u8>>) -> String {
        String::from_utf8_lossy(surface.get_ref()).into_owned()
    }

    #[test]
    fn test_first_frame_is_full() {
        let mut buffer = GlyphBuffer::new(3, 1).unwrap();
        buffer.set_cell(Point::new(0, 0), 'a', 15, 0);
        let palette = Palette::new();
        let mut surface = AnsiSurface::new(Vec::new());

        surface.present(&buffer.snapshot(0), &palette).unwrap();

        let out = written(&surface);
        assert!(out.starts_with("\x1b[0m\x1b[2J\x1b[H"));
        assert!(out.ends_with(
            "\x1b[38;2;255;255;255m\x1b[48;2;0;0;0ma\x1b[38;2;0;0;0m  "
        ));

        let stats = surface.last_stats();
        assert!(stats.full_redraw);
        assert_eq!(stats.cells_written, 3);
        assert_eq!(stats.cursor_moves, 1);
    }

    #[test]
    fn test_colors_emitted_once_per_run() {
        let mut buffer = GlyphBuffer::new(4, 2).unwrap();
        for x in 0..4 {
            buffer.set_cell(Point::new(x, 0), 'x', 2, 0);
            buffer.set_cell(Point::new(x, 1), 'x', 2, 0);
        }
        let mut surface = AnsiSurface::new(Vec::new());
        surface.present(&buffer.snapshot(0), &Palette::new()).unwrap();

        let stats = surface.last_stats();
        assert_eq!(stats.color_changes, 2);
        assert_eq!(stats.cursor_moves, 2);
    }

    #[test]
    fn test_unchanged_frame_writes_nothing() {
        let buffer = GlyphBuffer::new(5, 2).unwrap();
        let palette = Palette::new();
        let mut surface = AnsiSurface::new(Vec::new());

        surface.present(&buffer.snapshot(0), &palette).unwrap();
        let before = surface.get_ref().len();
        surface.present(&buffer.snapshot(0), &palette).unwrap();

        assert_eq!(surface.get_ref().len(), before);
        assert!(!surface.last_stats().full_redraw);
        assert_eq!(surface.last_stats().cells_written, 0);
    }

    #[test]
    fn test_only_changed_cells_are_written() {
        let mut buffer = GlyphBuffer::new(5, 3).unwrap();
        let palette = Palette::new();
        let mut surface = AnsiSurface::new(Vec::new());
        surface.present(&buffer.snapshot(0), &palette).unwrap();
        surface.get_mut().clear();

        buffer.set_cell(Point::new(2, 1), 'z', 15, 0);
        surface.present(&buffer.snapshot(0), &palette).unwrap();

        assert_eq!(written(&surface), "\x1b[2;3H\x1b[38;2;255;255;255mz");
        let stats = surface.last_stats();
        assert_eq!(stats.cells_written, 1);
        assert_eq!(stats.cursor_moves, 1);
    }

    #[test]
    fn test_background_change_redraws_empty_cells() {
        let buffer = GlyphBuffer::new(2, 1).unwrap();
        let palette = Palette::new();
        let mut surface = AnsiSurface::new(Vec::new());
        surface.present(&buffer.snapshot(0), &palette).unwrap();
        surface.present(&buffer.snapshot(4), &palette).unwrap();

        assert_eq!(surface.last_stats().cells_written, 2);
        assert!(!surface.last_stats().full_redraw);
    }

    #[test]
    fn test_palette_change_forces_full_redraw() {
        let buffer = GlyphBuffer::new(2, 2).unwrap();
        let mut palette = Palette::new();
        let mut surface = AnsiSurface::new(Vec::new());
        surface.present(&buffer.snapshot(0), &palette).unwrap();

        palette.apply(Some(&[Rgb::new(1, 2, 3)][..])).unwrap();
        surface.get_mut().clear();
        surface.present(&buffer.snapshot(0), &palette).unwrap();

        assert!(surface.last_stats().full_redraw);
        assert!(written(&surface).contains("\x1b[48;2;1;2;3m"));
    }

    #[test]
    fn test_size_change_forces_full_redraw() {
        let palette = Palette::new();
        let mut surface = AnsiSurface::new(Vec::new());
        surface
            .present(&GlyphBuffer::new(2, 2).unwrap().snapshot(0), &palette)
            .unwrap();
        surface
            .present(&GlyphBuffer::new(3, 2).unwrap().snapshot(0), &palette)
            .unwrap();
        assert!(surface.last_stats().full_redraw);
        assert_eq!(surface.last_stats().cells_written, 6);
    }

    #[test]
    fn test_non_incremental_always_full() {
        let buffer = GlyphBuffer::new(2, 1).unwrap();
        let palette = Palette::new();
        let mut surface = AnsiSurface::new(Vec::new()).with_incremental(false);
        surface.present(&buffer.snapshot(0), &palette).unwrap();
        surface.present(&buffer.snapshot(0), &palette).unwrap();
        assert!(surface.last_stats().full_redraw);
        assert_eq!(surface.last_stats().cells_written, 2);
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let buffer = GlyphBuffer::new(2, 1).unwrap();
        let palette = Palette::new();
        let mut surface = AnsiSurface::new(Vec::new());
        surface.present(&buffer.snapshot(0), &palette).unwrap();
        surface.invalidate();
        surface.present(&buffer.snapshot(0), &palette).unwrap();
        assert!(surface.last_stats().full_redraw);
    }

    #[test]
    fn test_non_ascii_glyph_forces_cursor_move() {
        let mut buffer = GlyphBuffer::new(2, 1).unwrap();
        buffer.set_cell(Point::new(0, 0), '█', 15, 0);
        buffer.set_cell(Point::new(1, 0), '█', 15, 0);
        let mut surface = AnsiSurface::new(Vec::new());
        surface.present(&buffer.snapshot(0), &Palette::new()).unwrap();

        assert_eq!(surface.last_stats().cursor_moves, 2);
        assert!(written(&surface).contains("\x1b[1;2H█"));
    }

    #[test]
    fn test_invalid_index_writes_nothing() {
        let mut buffer = GlyphBuffer::new(2, 1).unwrap();
        buffer.set_cell(Point::new(1, 0), 'a', 15, 99);
        let mut surface = AnsiSurface::new(Vec::new());

        let err = surface
            .present(&buffer.snapshot(0), &Palette::new())
            .unwrap_err();
        assert!(matches!(err, Error::Index(IndexError::IndexOutOfRange(99))));
        assert!(surface.get_ref().is_empty());
    }
}
