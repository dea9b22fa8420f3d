//! Rgb: A 24-bit color triple stored in a palette slot.

use serde::{Deserialize, Serialize};

/// RGB color, one byte per channel.
///
/// Serialized as a `[r, g, b]` array so palettes read naturally in
/// configuration files.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_tuple() {
        let rgb: Rgb = (255, 128, 0).into();
        assert_eq!(rgb, Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_rgb_from_hex() {
        let rgb: Rgb = 0x00FF_8000.into();
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.g, 128);
        assert_eq!(rgb.b, 0);
    }

    #[test]
    fn test_rgb_serde_as_array() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Rgb = serde_json::from_str("[10,20,30]").unwrap();
        assert_eq!(back, Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_rgb_debug_is_hex() {
        assert_eq!(format!("{:?}", Rgb::new(255, 0, 16)), "#ff0010");
    }
}
