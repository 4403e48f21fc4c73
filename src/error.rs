//! Error types for color parsing

use thiserror::Error;

/// Failure to read a `#RRGGBB` color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string does not start with `#`
    #[error("color {input:?} must start with '#'")]
    MissingPrefix {
        /// The rejected input
        input: String,
    },

    /// The string is not exactly `#` followed by six digits
    #[error("color {input:?} must have exactly 6 hex digits, found {digits}")]
    InvalidLength {
        /// The rejected input
        input: String,
        /// Number of characters after the `#`
        digits: usize,
    },

    /// A character after the `#` is not a hex digit
    #[error("color {input:?} has non-hex character {found:?} at position {position}")]
    InvalidDigit {
        /// The rejected input
        input: String,
        /// The offending character
        found: char,
        /// Byte offset of the offending character
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_missing_prefix() {
        let err = ParseError::MissingPrefix {
            input: "FF0000".to_string(),
        };
        assert_eq!(err.to_string(), "color \"FF0000\" must start with '#'");
    }

    #[test]
    fn test_display_invalid_length() {
        let err = ParseError::InvalidLength {
            input: "#FFF".to_string(),
            digits: 3,
        };
        assert_eq!(
            err.to_string(),
            "color \"#FFF\" must have exactly 6 hex digits, found 3"
        );
    }

    #[test]
    fn test_display_invalid_digit() {
        let err = ParseError::InvalidDigit {
            input: "#GG0000".to_string(),
            found: 'G',
            position: 1,
        };
        assert_eq!(
            err.to_string(),
            "color \"#GG0000\" has non-hex character 'G' at position 1"
        );
    }
}
