//! Colors for HTTP status codes

use serde::Serialize;

use crate::Color;

const RED: Color = Color::rgb(0xFD, 0x4B, 0x4B);
const YELLOW: Color = Color::rgb(0xFD, 0xCC, 0x4B);
const CYAN: Color = Color::rgb(0x4B, 0xFF, 0xD9);
const GREEN: Color = Color::rgb(0x71, 0xFD, 0x4B);

/// Background and text colors for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusColors {
    /// Badge background
    pub background: Color,
    /// Badge text
    pub foreground: Color,
}

impl StatusColors {
    /// Both colors as `#RRGGBB` strings, background first
    #[must_use]
    pub fn to_hex(self) -> (String, String) {
        (self.background.to_hex(), self.foreground.to_hex())
    }
}

/// Badge colors for an HTTP status code
///
/// Server errors are red with white text, client errors yellow, redirects
/// cyan, and everything else green, all with black text.
#[must_use]
pub const fn color_for_http_status(status: u16) -> StatusColors {
    let (background, foreground) = match status {
        500.. => (RED, Color::WHITE),
        400.. => (YELLOW, Color::BLACK),
        300.. => (CYAN, Color::BLACK),
        _ => (GREEN, Color::BLACK),
    };
    StatusColors {
        background,
        foreground,
    }
}
