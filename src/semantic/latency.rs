//! Colors for request latency in seconds

use super::BucketMap;

/// Quarter-second buckets from white (instant) to dark red (five seconds)
pub const LATENCY_SECONDS: BucketMap = BucketMap::new(&[
    (0.0, "#FFFFFF"),
    (0.25, "#FFF9E6"),
    (0.5, "#FFF3CC"),
    (0.75, "#FFECCC"),
    (1.0, "#FFE6B3"),
    (1.25, "#FFDF99"),
    (1.5, "#FFD980"),
    (1.75, "#FFD366"),
    (2.0, "#FFCC66"),
    (2.25, "#FFB84D"),
    (2.5, "#FFA333"),
    (2.75, "#FF8F33"),
    (3.0, "#FF7A33"),
    (3.25, "#FF664D"),
    (3.5, "#FF5233"),
    (3.75, "#FF3D33"),
    (4.0, "#FF2922"),
    (4.25, "#FF1500"),
    (4.5, "#E60000"),
    (4.75, "#CC0000"),
    (5.0, "#990000"),
]);

/// Color for a latency that lands exactly on a bucket
///
/// Anything else, including values beyond five seconds, has no color and
/// the caller picks its own fallback.
#[must_use]
pub fn color_for_latency_seconds(seconds: f64) -> Option<&'static str> {
    LATENCY_SECONDS.get(seconds)
}
