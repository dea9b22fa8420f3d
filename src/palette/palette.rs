//! Palette: Validated storage of up to 16 RGB colors.
//!
//! The palette keeps two views:
//! - the *active colors*: exactly the sequence most recently applied
//! - the *mapping*: all 16 device slots, where slots past the active
//!   length keep whatever color they were last programmed with
//!
//! Presentation surfaces read the mapping; callers read the active colors.

use super::rgb::Rgb;
use crate::error::{IndexError, PaletteError};
use log::debug;

/// Number of addressable palette slots.
pub const PALETTE_SIZE: usize = 16;

/// The classic 16-color console palette.
pub const DEFAULT_COLORS: [Rgb; PALETTE_SIZE] = [
    Rgb::new(0, 0, 0),       // black
    Rgb::new(0, 0, 128),     // dark blue
    Rgb::new(0, 128, 0),     // dark green
    Rgb::new(0, 128, 128),   // dark cyan
    Rgb::new(128, 0, 0),     // dark red
    Rgb::new(128, 0, 128),   // dark magenta
    Rgb::new(128, 128, 0),   // dark yellow
    Rgb::new(192, 192, 192), // gray
    Rgb::new(128, 128, 128), // dark gray
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(0, 255, 0),     // green
    Rgb::new(0, 255, 255),   // cyan
    Rgb::new(255, 0, 0),     // red
    Rgb::new(255, 0, 255),   // magenta
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(255, 255, 255), // white
];

/// Check that `index` addresses a palette slot.
///
/// # Errors
///
/// Returns [`IndexError::IndexOutOfRange`] if `index >= 16`.
#[inline]
pub const fn validate_index(index: u8) -> Result<u8, IndexError> {
    if (index as usize) < PALETTE_SIZE {
        Ok(index)
    } else {
        Err(IndexError::IndexOutOfRange(index))
    }
}

/// The active index → RGB mapping.
#[derive(Clone, PartialEq, Eq)]
pub struct Palette {
    /// Colors from the most recent successful `apply`.
    active: [Rgb; PALETTE_SIZE],
    /// Number of meaningful entries in `active`.
    len: u8,
    /// What each device slot is currently programmed with.
    mapping: [Rgb; PALETTE_SIZE],
    /// Bumped on every successful apply.
    revision: u64,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Create a palette holding [`DEFAULT_COLORS`].
    pub const fn new() -> Self {
        Self {
            active: DEFAULT_COLORS,
            len: PALETTE_SIZE as u8,
            mapping: DEFAULT_COLORS,
            revision: 0,
        }
    }

    /// Replace the active palette.
    ///
    /// Slots `0..colors.len()` are remapped to the supplied colors; slots
    /// beyond keep their previous mapping. The swap is atomic: on error the
    /// previous palette stays active untouched.
    ///
    /// `None` stands for an absent palette (e.g. a missing configuration
    /// entry passed straight through).
    ///
    /// # Errors
    ///
    /// - [`PaletteError::NullPalette`] if `colors` is `None`
    /// - [`PaletteError::TooManyColors`] if more than 16 colors are given
    pub fn apply(&mut self, colors: Option<&[Rgb]>) -> Result<(), PaletteError> {
        let colors = colors.ok_or(PaletteError::NullPalette)?;
        if colors.len() > PALETTE_SIZE {
            return Err(PaletteError::TooManyColors(colors.len()));
        }

        self.active[..colors.len()].copy_from_slice(colors);
        self.mapping[..colors.len()].copy_from_slice(colors);
        // Bounded by PALETTE_SIZE above.
        self.len = u8::try_from(colors.len()).unwrap_or(u8::MAX);
        self.revision += 1;

        debug!(
            "palette applied: {} colors, revision {}",
            colors.len(),
            self.revision
        );
        Ok(())
    }

    /// The colors from the most recent successful apply (at most 16).
    #[inline]
    pub fn active_colors(&self) -> &[Rgb] {
        &self.active[..self.len as usize]
    }

    /// All 16 device slots as currently programmed.
    #[inline]
    pub const fn mapping(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.mapping
    }

    /// Look up the RGB color for a palette index.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::IndexOutOfRange`] if `index >= 16`.
    #[inline]
    pub const fn resolve(&self, index: u8) -> Result<Rgb, IndexError> {
        match validate_index(index) {
            Ok(i) => Ok(self.mapping[i as usize]),
            Err(e) => Err(e),
        }
    }

    /// Counter bumped on every successful apply.
    ///
    /// Surfaces compare this against the revision they last programmed.
    #[inline]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette")
            .field("active", &self.active_colors())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
