//! Session: The owner of one glyph buffer and its palette.
//!
//! A session replaces any process-wide console state. Create one per
//! window, draw into [`Session::buffer_mut`] with the [`raster`](crate::raster)
//! functions every frame, then hand it a [`Surface`] to present.

use crate::buffer::{GlyphBuffer, Snapshot};
use crate::config::SessionConfig;
use crate::error::{ConfigError, Error, IndexError, PaletteError};
use crate::palette::{Palette, Rgb};
use crate::surface::Surface;
use log::{debug, trace};

/// A glyph buffer, its palette and a reusable presentation frame.
#[derive(Debug, Clone)]
pub struct Session {
    buffer: GlyphBuffer,
    palette: Palette,
    /// Reused by `present` so steady-state frames do not allocate.
    frame: Snapshot,
}

impl Session {
    /// Create a session with the default palette and background index 0.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] if width or height is 0.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        let buffer = GlyphBuffer::new(width, height)?;
        debug!("session created: {width}x{height}");
        Ok(Self {
            frame: Snapshot::with_size(width, height),
            buffer,
            palette: Palette::new(),
        })
    }

    /// Create a session from a configuration.
    ///
    /// Either every setting applies or no session is created.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] for invalid dimensions
    /// - [`Error::Palette`] if the palette has more than 16 colors
    /// - [`Error::Index`] if the background index is out of range
    pub fn from_config(config: &SessionConfig) -> Result<Self, Error> {
        let mut session = Self::new(config.width, config.height)?;
        if let Some(colors) = &config.palette {
            session.apply_palette(Some(colors.as_slice()))?;
        }
        session.set_background(config.background)?;
        Ok(session)
    }

    /// The glyph buffer.
    #[inline]
    pub const fn buffer(&self) -> &GlyphBuffer {
        &self.buffer
    }

    /// The glyph buffer, for drawing.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut GlyphBuffer {
        &mut self.buffer
    }

    /// The palette.
    #[inline]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the active palette. See [`Palette::apply`].
    ///
    /// # Errors
    ///
    /// Propagates [`PaletteError`]; the previous palette stays active.
    pub fn apply_palette(&mut self, colors: Option<&[Rgb]>) -> Result<(), PaletteError> {
        self.palette.apply(colors)
    }

    /// The default background index.
    #[inline]
    pub const fn background(&self) -> u8 {
        self.buffer.background()
    }

    /// Set the default background index.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::IndexOutOfRange`] if `index >= 16`.
    pub fn set_background(&mut self, index: u8) -> Result<(), IndexError> {
        self.buffer.set_background(index)?;
        debug!("default background set to {index}");
        Ok(())
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Snapshot the buffer using the session's default background.
    pub fn snapshot(&self) -> Snapshot {
        self.buffer.snapshot(self.buffer.background())
    }

    /// Like [`snapshot`](Self::snapshot), reusing `out`'s allocation.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        self.buffer.snapshot_into(self.buffer.background(), out);
    }

    /// Snapshot the buffer and hand it to `surface`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the surface reports, including
    /// [`Error::Index`] for cells whose indices are outside the palette.
    pub fn present<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), Error> {
        self.buffer
            .snapshot_into(self.buffer.background(), &mut self.frame);
        trace!(
            "presenting {}x{} frame",
            self.frame.width(),
            self.frame.height()
        );
        surface.present(&self.frame, &self.palette)
    }
}
