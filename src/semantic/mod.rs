//! Semantic color maps
//!
//! Static tables that turn dashboard values (hours worked, request latency,
//! HTTP status) into colors. Tables are plain immutable values; callers that
//! want a different scale build their own [`BucketMap`] or [`HoursScale`]
//! instead of mutating shared state.

mod hours;
mod latency;
mod status;

pub use hours::{HOURS_WORKED, HoursScale, color_for_hours_worked};
pub use latency::{LATENCY_SECONDS, color_for_latency_seconds};
pub use status::{StatusColors, color_for_http_status};

/// Exact-match table from numeric bucket keys to hex colors
///
/// There is no interpolation between keys: a value that is not exactly a
/// key has no color. Entries whose color is the empty string also read as
/// "no color".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketMap {
    entries: &'static [(f64, &'static str)],
}

impl BucketMap {
    /// Wrap a static table of `(key, hex)` entries
    #[must_use]
    pub const fn new(entries: &'static [(f64, &'static str)]) -> Self {
        Self { entries }
    }

    /// Color for exactly `key`, if the table has one
    #[must_use]
    #[expect(clippy::float_cmp, reason = "Buckets are matched exactly, not by range")]
    pub fn get(&self, key: f64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(bucket, _)| *bucket == key)
            .map(|&(_, hex)| hex)
            .filter(|hex| !hex.is_empty())
    }

    /// The raw `(key, hex)` entries in table order
    #[must_use]
    pub const fn entries(&self) -> &'static [(f64, &'static str)] {
        self.entries
    }

    /// Number of entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
