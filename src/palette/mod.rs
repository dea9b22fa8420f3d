//! Palette module: the 16-entry indexed color table.
//!
//! This module contains:
//! - [`Rgb`]: A 24-bit color triple
//! - [`Palette`]: The active index → RGB mapping
//! - [`DEFAULT_COLORS`]: The classic 16-color console palette

mod rgb;
#[allow(clippy::module_inception)]
mod palette;

pub use palette::{validate_index, Palette, DEFAULT_COLORS, PALETTE_SIZE};
pub use rgb::Rgb;
