//! ratatui styles built from derived colors
//!
//! Thin adapter for dashboards that render with ratatui: every function here
//! only packages colors from the rest of the crate into `Style`, `Span` and
//! `Line` values. Nothing is drawn.

use ratatui::style::{Color as TermColor, Modifier, Style};
use ratatui::text::{Line, Span};
use tracing::warn;

use crate::Color;
use crate::color::{hash_to_color, pick_foreground};
use crate::gradient::Gradient;
use crate::semantic::{color_for_hours_worked, color_for_http_status, color_for_latency_seconds};

/// Glyph for a filled progress cell
pub const PROGRESS_FULL_CHAR: &str = "█";

/// Glyph for an empty progress cell
pub const PROGRESS_EMPTY_CHAR: &str = "░";

/// Style for the unfilled part of a progress bar
pub const PROGRESS_EMPTY_STYLE: Style = Style::new().fg(TermColor::Indexed(241));

impl From<Color> for TermColor {
    fn from(color: Color) -> Self {
        Self::Rgb(color.r, color.g, color.b)
    }
}

/// One foreground style per gradient cell
#[must_use]
pub fn ramp_styles(gradient: &Gradient) -> Vec<Style> {
    gradient
        .iter()
        .map(|&color| Style::default().fg(color.into()))
        .collect()
}

/// Background/foreground pair with legible text for `background`
#[must_use]
pub fn swatch_style(background: Color) -> Style {
    Style::default()
        .bg(background.into())
        .fg(pick_foreground(background).into())
}

/// A bold, padded badge whose color is derived from the label itself
///
/// The same label always gets the same badge color.
#[must_use]
pub fn hash_badge(label: &str) -> Span<'static> {
    let style = swatch_style(hash_to_color(label)).add_modifier(Modifier::BOLD);
    Span::styled(format!(" {label} "), style)
}

/// A padded badge showing an HTTP status code in its status colors
#[must_use]
pub fn status_badge(status: u16) -> Span<'static> {
    let colors = color_for_http_status(status);
    let style = Style::default()
        .bg(colors.background.into())
        .fg(colors.foreground.into());
    Span::styled(format!(" {status} "), style)
}

fn table_style(hex: Option<&str>) -> Style {
    let Some(hex) = hex else {
        return Style::default();
    };
    match Color::from_hex(hex) {
        Ok(color) => swatch_style(color),
        Err(err) => {
            warn!(%err, "Ignoring unparseable table color");
            Style::default()
        }
    }
}

/// Cell style for a day's worked hours; unstyled when the hours have no color
#[must_use]
pub fn hours_style(hours: f64) -> Style {
    table_style(color_for_hours_worked(hours))
}

/// Cell style for a latency in seconds; unstyled off the bucket grid
#[must_use]
pub fn latency_style(seconds: f64) -> Style {
    table_style(color_for_latency_seconds(seconds))
}

/// Number of filled cells for `percent` of a `width`-cell bar
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "Percent is clamped to [0, 1] so the product is within 0..=width"
)]
fn filled_cells(percent: f64, width: usize) -> usize {
    let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 1.0) };
    ((width as f64) * percent).round() as usize
}

/// A progress bar as wide as `ramp`, filled cell by cell in ramp colors
///
/// `percent` is clamped to [0, 1]. Filled cells use [`PROGRESS_FULL_CHAR`]
/// in the ramp style of their position; the rest use
/// [`PROGRESS_EMPTY_CHAR`] in [`PROGRESS_EMPTY_STYLE`].
#[must_use]
pub fn progress_line(percent: f64, ramp: &[Style]) -> Line<'static> {
    let filled = filled_cells(percent, ramp.len());
    let mut spans: Vec<Span<'static>> = ramp[..filled]
        .iter()
        .map(|&style| Span::styled(PROGRESS_FULL_CHAR, style))
        .collect();
    let empty = ramp.len() - filled;
    if empty > 0 {
        spans.push(Span::styled(
            PROGRESS_EMPTY_CHAR.repeat(empty),
            PROGRESS_EMPTY_STYLE,
        ));
    }
    Line::from(spans)
}
