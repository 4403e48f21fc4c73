//! Color ramps for progress bars and heat scales
//!
//! [`Gradient::ramp`] blends two anchors perceptually, [`Gradient::tri_stop`]
//! interpolates three anchors in plain RGB and lightens the result. The two
//! produce visibly different output for the same anchors; pick the one whose
//! look the surrounding UI already uses.

use std::ops::Index;
use std::slice;

use serde::Serialize;
use tracing::debug;

use crate::ParseError;
use crate::color::{Color, blend_perceptual, lerp_rgb, lighten};

/// An ordered, fixed-length sequence of colors
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Gradient {
    colors: Vec<Color>,
}

/// `numerator / denominator` as a float fraction
#[expect(
    clippy::cast_precision_loss,
    reason = "Step counts are far below 2^52"
)]
fn fraction(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator as f64
}

impl Gradient {
    /// Perceptual two-color ramp of `steps` colors
    ///
    /// Element `i` is `a` blended toward `b` at `i / steps`. The last element
    /// sits one step short of `b`; the end anchor itself is never emitted.
    #[must_use]
    pub fn ramp(a: Color, b: Color, steps: usize) -> Self {
        if steps == 0 {
            debug!("Requested an empty ramp");
        }
        let colors = (0..steps)
            .map(|i| blend_perceptual(a, b, fraction(i, steps)))
            .collect();
        Self { colors }
    }

    /// Three-anchor ramp using linear RGB interpolation, then lightened
    ///
    /// The first `steps / 2` colors run from `start` toward `mid`, the rest
    /// from `mid` toward `end`. Each color is passed through
    /// [`lighten`] with `lighten_factor`.
    #[must_use]
    pub fn tri_stop(
        start: Color,
        mid: Color,
        end: Color,
        steps: usize,
        lighten_factor: f64,
    ) -> Self {
        let midpoint = steps / 2;
        let colors = (0..steps)
            .map(|i| {
                let color = if i < midpoint {
                    lerp_rgb(start, mid, fraction(i, midpoint))
                } else {
                    lerp_rgb(mid, end, fraction(i - midpoint, steps - midpoint))
                };
                lighten(color, lighten_factor)
            })
            .collect();
        Self { colors }
    }

    /// Number of colors
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the gradient has no colors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Borrow the colors in order
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate over the colors in order
    pub fn iter(&self) -> slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Encode every color as `#RRGGBB`
    #[must_use]
    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

impl Index<usize> for Gradient {
    type Output = Color;

    fn index(&self, index: usize) -> &Self::Output {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Gradient {
    type Item = &'a Color;
    type IntoIter = slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl IntoIterator for Gradient {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl From<Gradient> for Vec<Color> {
    fn from(gradient: Gradient) -> Self {
        gradient.colors
    }
}

/// Perceptual ramp between two `#RRGGBB` anchors
///
/// # Errors
///
/// Returns a [`ParseError`] if either anchor is not a valid hex color
pub fn make_ramp(hex_a: &str, hex_b: &str, steps: usize) -> Result<Gradient, ParseError> {
    Ok(Gradient::ramp(
        Color::from_hex(hex_a)?,
        Color::from_hex(hex_b)?,
        steps,
    ))
}

/// Three-anchor linear ramp, lightened and encoded as `#RRGGBB` strings
///
/// # Errors
///
/// Returns a [`ParseError`] if any anchor is not a valid hex color
pub fn make_tri_stop_gradient(
    hex_start: &str,
    hex_mid: &str,
    hex_end: &str,
    steps: usize,
    lighten_factor: f64,
) -> Result<Vec<String>, ParseError> {
    let gradient = Gradient::tri_stop(
        Color::from_hex(hex_start)?,
        Color::from_hex(hex_mid)?,
        Color::from_hex(hex_end)?,
        steps,
        lighten_factor,
    );
    Ok(gradient.to_hex())
}

/// Single linear RGB interpolation between two `#RRGGBB` colors
///
/// # Errors
///
/// Returns a [`ParseError`] if either color is not a valid hex color
pub fn interpolate_hex(hex_a: &str, hex_b: &str, t: f64) -> Result<String, ParseError> {
    let a = Color::from_hex(hex_a)?;
    let b = Color::from_hex(hex_b)?;
    Ok(lerp_rgb(a, b, t).to_hex())
}
