//! Text module: Block-font ("FIGlet") text layout.
//!
//! This module contains:
//! - [`BlockFont`]: The capability the layout needs from a loaded font
//! - [`layout`]: Turns a string into positioned characters
//! - [`FigletFont`]: A parser for `flf2a` FIGlet font files

mod figlet;
mod layout;

pub use figlet::FigletFont;
pub use layout::{layout, BlockFont, LaidGlyph};
