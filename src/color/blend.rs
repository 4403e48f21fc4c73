//! Color interpolation
//!
//! Two interpolation models live here and they are not interchangeable:
//! [`blend_perceptual`] mixes in CIE-Luv and rounds, [`lerp_rgb`] mixes the
//! raw sRGB channels and truncates. Ramps built from one never match ramps
//! built from the other.

use palette::convert::FromColorUnclamped;
use palette::white_point::D65;
use palette::{FromColor, Luv, Mix, Srgb};

use super::{Color, channel_from_f64};

type Perceptual = Luv<D65, f64>;

fn to_perceptual(color: Color) -> Perceptual {
    let srgb: Srgb<f64> = Srgb::new(color.r, color.g, color.b).into_format();
    Perceptual::from_color_unclamped(srgb)
}

fn from_perceptual(luv: Perceptual) -> Color {
    // Out-of-gamut mixes are clamped by the conversion, then rounded.
    let srgb: Srgb<u8> = Srgb::<f64>::from_color(luv).into_format();
    Color::rgb(srgb.red, srgb.green, srgb.blue)
}

/// Blend two colors in CIE-Luv space
///
/// `t` is clamped to [0, 1]. `t = 0` yields `a`, `t = 1` yields `b`, and
/// blending a color with itself yields the same color for every `t`.
/// Mixing in Luv keeps saturated hue transitions from passing through grey.
#[must_use]
pub fn blend_perceptual(a: Color, b: Color, t: f64) -> Color {
    if a == b {
        return a;
    }
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    from_perceptual(to_perceptual(a).mix(to_perceptual(b), t))
}

/// Linear interpolation of raw sRGB channels
///
/// Each channel is `a * (1 - t) + b * t`, truncated toward zero and clamped.
#[must_use]
#[expect(
    clippy::suboptimal_flops,
    reason = "Unfused arithmetic keeps truncation identical to existing dashboards"
)]
pub fn lerp_rgb(a: Color, b: Color, t: f64) -> Color {
    let mix =
        |from: u8, to: u8| channel_from_f64(f64::from(from) * (1.0 - t) + f64::from(to) * t);
    Color::rgb(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// Move each channel toward white by `factor` of its remaining distance
///
/// `factor = 0` leaves the color unchanged and `factor = 1` gives white.
/// Results are clamped, so factors outside [0, 1] are accepted.
#[must_use]
#[expect(
    clippy::suboptimal_flops,
    reason = "Unfused arithmetic keeps truncation identical to existing dashboards"
)]
pub fn lighten(color: Color, factor: f64) -> Color {
    let lift = |channel: u8| {
        let channel = f64::from(channel);
        channel_from_f64(channel + (255.0 - channel) * factor)
    };
    Color::rgb(lift(color.r), lift(color.g), lift(color.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const PURPLE: Color = Color::rgb(0xB1, 0x4F, 0xFF);
    const MINT: Color = Color::rgb(0x00, 0xFF, 0xA3);

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend_perceptual(PURPLE, MINT, 0.0), PURPLE);
        assert_eq!(blend_perceptual(PURPLE, MINT, 1.0), MINT);
    }

    #[test]
    fn test_blend_clamps_fraction() {
        assert_eq!(blend_perceptual(PURPLE, MINT, -3.0), PURPLE);
        assert_eq!(blend_perceptual(PURPLE, MINT, 7.5), MINT);
        assert_eq!(blend_perceptual(PURPLE, MINT, f64::NAN), PURPLE);
    }

    #[test]
    fn test_blend_black_white_midpoint_is_neutral_mid_grey() {
        let mid = blend_perceptual(Color::BLACK, Color::WHITE, 0.5);
        for channel in [mid.r, mid.g, mid.b] {
            assert!((116..=122).contains(&channel), "got {mid}");
        }
    }

    #[test]
    fn test_blend_near_one_approaches_end() {
        let near = blend_perceptual(PURPLE, MINT, 0.999);
        assert!(near.r.abs_diff(MINT.r) <= 2, "got {near}");
        assert!(near.g.abs_diff(MINT.g) <= 2, "got {near}");
        assert!(near.b.abs_diff(MINT.b) <= 2, "got {near}");
    }

    #[test]
    fn test_lerp_rgb_truncates() {
        let mid = lerp_rgb(Color::BLACK, Color::rgb(255, 101, 3), 0.5);
        assert_eq!(mid, Color::rgb(127, 50, 1));
    }

    #[test]
    fn test_lerp_rgb_endpoints() {
        assert_eq!(lerp_rgb(PURPLE, MINT, 0.0), PURPLE);
        assert_eq!(lerp_rgb(PURPLE, MINT, 1.0), MINT);
    }

    #[test]
    fn test_lighten_identity_and_white() {
        assert_eq!(lighten(PURPLE, 0.0), PURPLE);
        assert_eq!(lighten(PURPLE, 1.0), Color::WHITE);
    }

    #[test]
    fn test_lighten_partial_truncates() {
        // 28 + 227 * 0.4 = 118.8, 157 + 98 * 0.4 = 196.2, 197 + 58 * 0.4 = 220.2
        assert_eq!(lighten(Color::rgb(28, 157, 197), 0.4), Color::rgb(118, 196, 220));
    }

    #[test]
    fn test_lighten_out_of_range_factor_is_clamped() {
        assert_eq!(lighten(PURPLE, 2.0), Color::WHITE);
        assert_eq!(lighten(Color::rgb(10, 20, 255), -1.0), Color::rgb(0, 0, 255));
    }

    proptest! {
        #[test]
        fn prop_blend_with_self_is_identity(
            (r, g, b) in any::<(u8, u8, u8)>(),
            t in 0.0_f64..=1.0,
        ) {
            let color = Color::rgb(r, g, b);
            prop_assert_eq!(blend_perceptual(color, color, t), color);
        }

        #[test]
        fn prop_blend_at_zero_is_start(
            a in any::<(u8, u8, u8)>(),
            b in any::<(u8, u8, u8)>(),
        ) {
            let (a, b) = (Color::from(a), Color::from(b));
            prop_assert_eq!(blend_perceptual(a, b, 0.0), a);
        }

        #[test]
        fn prop_lighten_never_darkens(
            (r, g, b) in any::<(u8, u8, u8)>(),
            factor in 0.0_f64..=1.0,
        ) {
            let lifted = lighten(Color::rgb(r, g, b), factor);
            prop_assert!(lifted.r >= r && lifted.g >= g && lifted.b >= b);
        }
    }
}
