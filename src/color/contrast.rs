//! Foreground selection for colored backgrounds

use super::Color;

/// Luma above which dark text is used
pub const LUMA_THRESHOLD: f64 = 128.0;

/// Approximate perceived brightness, `0.299 R + 0.587 G + 0.114 B`
#[must_use]
#[expect(
    clippy::suboptimal_flops,
    reason = "Plain weighted sum matches the published luma coefficients"
)]
pub fn luma(color: Color) -> f64 {
    0.299 * f64::from(color.r) + 0.587 * f64::from(color.g) + 0.114 * f64::from(color.b)
}

/// Black text on light backgrounds, white text on dark ones
#[must_use]
pub fn pick_foreground(background: Color) -> Color {
    if luma(background) > LUMA_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    }
}
