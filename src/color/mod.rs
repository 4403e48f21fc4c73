//! Color values and the pure operations that derive them
//!
//! A [`Color`] is an opaque 8-bit RGB triple. Everything in this module is a
//! pure function over `Color` values: parsing and formatting (`hex`),
//! interpolation and lightening (`blend`), hashing strings to colors
//! (`hash`), and picking a legible text color for a background (`contrast`).

mod blend;
mod contrast;
mod hash;
mod hex;

pub use blend::{blend_perceptual, lerp_rgb, lighten};
pub use contrast::{LUMA_THRESHOLD, luma, pick_foreground};
pub use hash::{HASH_LIGHTEN, fnv1a_32, hash_to_color};

use serde::{Deserialize, Serialize};

/// An opaque 24-bit RGB color
///
/// Serializes as its canonical `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black, `#000000`
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white, `#FFFFFF`
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from its three channels
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as an `(r, g, b)` tuple
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = crate::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

/// Convert a float channel value to `u8`, clamping into [0, 255] and
/// truncating toward zero.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Value is clamped to the u8 range before the cast"
)]
pub(crate) fn channel_from_f64(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Color::BLACK.channels(), (0, 0, 0));
        assert_eq!(Color::WHITE.channels(), (255, 255, 255));
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Color::from((1, 2, 3)), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_channel_from_f64_clamps_and_truncates() {
        assert_eq!(channel_from_f64(-12.0), 0);
        assert_eq!(channel_from_f64(300.0), 255);
        assert_eq!(channel_from_f64(127.99), 127);
        assert_eq!(channel_from_f64(f64::NAN), 0);
    }

    #[test]
    fn test_serde_as_hex_string() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&Color::rgb(0xB1, 0x4F, 0xFF))?;
        assert_eq!(json, "\"#B14FFF\"");

        let parsed: Color = serde_json::from_str("\"#00ffa3\"")?;
        assert_eq!(parsed, Color::rgb(0x00, 0xFF, 0xA3));
        Ok(())
    }

    #[test]
    fn test_serde_rejects_malformed() {
        let parsed: Result<Color, _> = serde_json::from_str("\"#12\"");
        assert!(parsed.is_err());
    }
}
