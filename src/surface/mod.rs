//! Surface module: Presentation of finished snapshots.
//!
//! The core never talks to a device. A [`Surface`] receives a [`Snapshot`]
//! plus the [`Palette`] and turns them into whatever its output needs:
//! - [`AnsiSurface`]: 24-bit ANSI escape sequences on any `Write`
//! - [`TerminalSurface`]: an `AnsiSurface` on stdout with raw mode and
//!   alternate screen handled through crossterm

mod ansi;
mod output;
mod terminal;

pub use ansi::{AnsiSurface, EmitStats};
pub use output::OutputBuffer;
pub use terminal::TerminalSurface;

use crate::buffer::Snapshot;
use crate::error::Error;
use crate::palette::Palette;

/// Something that can display a snapshot.
pub trait Surface {
    /// Display `snapshot`, resolving indices through `palette`.
    ///
    /// # Errors
    ///
    /// Implementations report [`Error::Index`] for out-of-range palette
    /// indices and [`Error::Io`] for device failures.
    fn present(&mut self, snapshot: &Snapshot, palette: &Palette) -> Result<(), Error>;
}
