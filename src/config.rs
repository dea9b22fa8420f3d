//! Session configuration.
//!
//! Every field has a default, so a configuration document only needs the
//! keys it wants to change:
//!
//! ```
//! use glyphwork::SessionConfig;
//!
//! let config = SessionConfig::from_json(r#"{ "width": 40, "palette": [[0, 0, 0], [255, 0, 0]] }"#).unwrap();
//! assert_eq!(config.width, 40);
//! assert_eq!(config.height, 25);
//! ```

use crate::error::ConfigError;
use crate::palette::Rgb;
use serde::{Deserialize, Serialize};

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Buffer width in columns.
    pub width: u16,
    /// Buffer height in rows.
    pub height: u16,
    /// Default background index.
    pub background: u8,
    /// Colors to apply over the default palette, if any.
    pub palette: Option<Vec<Rgb>>,
    /// Presentation settings.
    pub surface: SurfaceConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,
            background: 0,
            palette: None,
            surface: SurfaceConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or
    /// has fields of the wrong type.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Settings for terminal presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Whether to switch to the alternate screen buffer.
    pub alternate_screen: bool,
    /// Whether to hide the cursor while presenting.
    pub hide_cursor: bool,
    /// Whether to emit only cells that changed since the previous frame.
    pub incremental: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            hide_cursor: true,
            incremental: true,
        }
    }
}
