//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::palette::Rgb;
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical console (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a character.
    #[inline]
    pub fn write_char(&mut self, ch: char) {
        let mut utf8 = [0u8; 4];
        self.data
            .extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
    }

    /// Move cursor to (x, y) position (0-indexed; emitted 1-indexed).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        let row = u32::from(y) + 1;
        let col = u32::from(x) + 1;
        if row == 1 && col == 1 {
            self.data.extend_from_slice(b"\x1b[H");
        } else {
            self.push_fmt(format_args!("\x1b[{row};{col}H"));
        }
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        self.push_fmt(format_args!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b));
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        self.push_fmt(format_args!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b));
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Append formatted text. Writing into a `Vec` cannot fail.
    #[inline]
    fn push_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.data.write_fmt(args);
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
