//! Error types.
//!
//! Drawing never fails: out-of-range coordinates are clipped silently.
//! Only construction, configuration and palette operations report errors.

use std::fmt;

/// Failure to replace the active palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// More than 16 colors were supplied (carries the supplied count).
    TooManyColors(usize),
    /// No color sequence was supplied at all.
    NullPalette,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyColors(n) => {
                write!(f, "palette holds at most 16 colors, got {n}")
            }
            Self::NullPalette => write!(f, "no palette supplied"),
        }
    }
}

impl std::error::Error for PaletteError {}

/// A palette index outside `0..16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// The offending index.
    IndexOutOfRange(u8),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange(i) => write!(f, "palette index {i} out of range 0..16"),
        }
    }
}

impl std::error::Error for IndexError {}

/// Invalid construction or drawing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Buffer dimensions must both be at least 1.
    InvalidDimensions {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },
    /// Grid spacing must be at least 1.
    InvalidSpacing(i32),
    /// Block-font text must be ASCII.
    NonAsciiInput,
    /// A configuration document or font file could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid buffer dimensions {width}x{height}")
            }
            Self::InvalidSpacing(s) => write!(f, "grid spacing must be >= 1, got {s}"),
            Self::NonAsciiInput => write!(f, "string contains non-ascii characters"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Any error the crate can report.
#[derive(Debug)]
pub enum Error {
    /// Palette replacement failed.
    Palette(PaletteError),
    /// A palette index was out of range.
    Index(IndexError),
    /// Configuration was invalid.
    Config(ConfigError),
    /// The presentation surface failed to write.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(e) => write!(f, "{e}"),
            Self::Index(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "surface I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Palette(e) => Some(e),
            Self::Index(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<PaletteError> for Error {
    fn from(e: PaletteError) -> Self {
        Self::Palette(e)
    }
}

impl From<IndexError> for Error {
    fn from(e: IndexError) -> Self {
        Self::Index(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
