//! `#RRGGBB` encoding and decoding

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::Color;
use crate::ParseError;

impl Color {
    /// Parse a `#RRGGBB` string
    ///
    /// Digits may be upper or lower case. Shorthand forms (`#RGB`) and
    /// alpha suffixes are rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the `#` prefix is missing, when there
    /// are not exactly six digits, or when a digit is not hexadecimal.
    pub fn from_hex(input: &str) -> Result<Self, ParseError> {
        let result = parse(input);
        if let Err(err) = &result {
            debug!(%err, "Rejected hex color");
        }
        result
    }

    /// Format as `#RRGGBB` with uppercase digits
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

fn parse(input: &str) -> Result<Color, ParseError> {
    let Some(digits) = input.strip_prefix('#') else {
        return Err(ParseError::MissingPrefix {
            input: input.to_string(),
        });
    };

    let count = digits.chars().count();
    if count != 6 {
        return Err(ParseError::InvalidLength {
            input: input.to_string(),
            digits: count,
        });
    }

    let mut nibbles = [0_u8; 6];
    for (slot, (offset, ch)) in nibbles.iter_mut().zip(digits.char_indices()) {
        let Some(value) = ch.to_digit(16) else {
            return Err(ParseError::InvalidDigit {
                input: input.to_string(),
                found: ch,
                position: offset + 1,
            });
        };
        *slot = u8::try_from(value).unwrap_or_default();
    }

    let [r1, r0, g1, g0, b1, b0] = nibbles;
    Ok(Color::rgb((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0))
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("#000000", Color::rgb(0, 0, 0))]
    #[case("#FFFFFF", Color::rgb(255, 255, 255))]
    #[case("#B14FFF", Color::rgb(0xB1, 0x4F, 0xFF))]
    #[case("#00ffa3", Color::rgb(0x00, 0xFF, 0xA3))]
    #[case("#a2079A", Color::rgb(0xA2, 0x07, 0x9A))]
    fn test_from_hex_valid(#[case] input: &str, #[case] expected: Color) {
        assert_eq!(Color::from_hex(input), Ok(expected));
    }

    #[test]
    fn test_from_hex_missing_prefix() {
        assert_eq!(
            Color::from_hex("FF0000"),
            Err(ParseError::MissingPrefix {
                input: "FF0000".to_string()
            })
        );
    }

    #[rstest]
    #[case("#", 0)]
    #[case("#fa0", 3)]
    #[case("#FF00000", 7)]
    #[case("#FF0000FF", 8)]
    fn test_from_hex_wrong_length(#[case] input: &str, #[case] digits: usize) {
        assert_eq!(
            Color::from_hex(input),
            Err(ParseError::InvalidLength {
                input: input.to_string(),
                digits
            })
        );
    }

    #[test]
    fn test_from_hex_invalid_digit() {
        assert_eq!(
            Color::from_hex("#12G456"),
            Err(ParseError::InvalidDigit {
                input: "#12G456".to_string(),
                found: 'G',
                position: 3,
            })
        );
    }

    #[test]
    fn test_from_hex_multibyte_is_rejected_not_split() {
        let result = Color::from_hex("#ééé000");
        assert!(matches!(
            result,
            Err(ParseError::InvalidDigit {
                found: 'é',
                position: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_from_hex_does_not_zero_fill() {
        assert!(Color::from_hex("#zzzzzz").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_to_hex_uppercase_padded() {
        assert_eq!(Color::rgb(1, 0x0A, 0xFF).to_hex(), "#010AFF");
    }

    #[test]
    fn test_display_matches_to_hex() {
        let color = Color::rgb(0x43, 0xBF, 0x6D);
        assert_eq!(format!("bg={color}"), "bg=#43BF6D");
    }

    #[test]
    fn test_from_str() -> Result<(), ParseError> {
        let color: Color = "#43BF6D".parse()?;
        assert_eq!(color, Color::rgb(0x43, 0xBF, 0x6D));
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_color_round_trips((r, g, b) in any::<(u8, u8, u8)>()) {
            let color = Color::rgb(r, g, b);
            prop_assert_eq!(Color::from_hex(&color.to_hex()), Ok(color));
        }

        #[test]
        fn prop_uppercase_hex_round_trips(s in "#[0-9A-F]{6}") {
            let color = Color::from_hex(&s);
            prop_assert_eq!(color.map(Color::to_hex), Ok(s));
        }
    }
}
