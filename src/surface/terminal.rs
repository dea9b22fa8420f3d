//! Terminal surface: An [`AnsiSurface`] on stdout with terminal setup.

use super::ansi::{AnsiSurface, EmitStats};
use super::Surface;
use crate::buffer::Snapshot;
use crate::config::SurfaceConfig;
use crate::error::Error;
use crate::palette::Palette;
use crossterm::{
    cursor, execute,
    style::ResetColor,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use std::io::{self, Stdout};

/// Presents snapshots on the controlling terminal.
///
/// Construction enters raw mode and, depending on the [`SurfaceConfig`],
/// the alternate screen with a hidden cursor. Dropping the surface
/// restores the terminal.
pub struct TerminalSurface {
    inner: AnsiSurface<Stdout>,
    config: SurfaceConfig,
}

impl TerminalSurface {
    /// Set up the terminal with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if terminal setup fails.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(SurfaceConfig::default())
    }

    /// Set up the terminal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if terminal setup fails. Whatever was already
    /// changed is restored before returning.
    pub fn with_config(config: SurfaceConfig) -> Result<Self, Error> {
        terminal::enable_raw_mode()?;

        // From here on, Drop undoes partial setup.
        let mut surface = Self {
            inner: AnsiSurface::new(io::stdout()).with_incremental(config.incremental),
            config,
        };
        let stdout = surface.inner.get_mut();
        if surface.config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if surface.config.hide_cursor {
            execute!(stdout, cursor::Hide)?;
        }

        debug!("terminal surface ready: {:?}", surface.config);
        Ok(surface)
    }

    /// Current terminal size as (columns, rows).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the size cannot be queried.
    pub fn size() -> Result<(u16, u16), Error> {
        Ok(terminal::size()?)
    }

    /// The configuration the surface was set up with.
    #[inline]
    pub const fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Statistics about the most recent frame.
    #[inline]
    pub const fn last_stats(&self) -> EmitStats {
        self.inner.last_stats()
    }

    /// Redraw everything on the next present, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.inner.invalidate();
    }
}

impl Surface for TerminalSurface {
    fn present(&mut self, snapshot: &Snapshot, palette: &Palette) -> Result<(), Error> {
        self.inner.present(snapshot, palette)
    }
}

impl std::fmt::Debug for TerminalSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSurface")
            .field("config", &self.config)
            .field("inner", &self.inner)
            .finish()
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let stdout = self.inner.get_mut();
        let _ = execute!(stdout, ResetColor, cursor::Show);
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        debug!("terminal restored");
    }
}
