//! Background colors for hours worked in a day

use super::BucketMap;

/// Half-hour buckets from a pale orange up to pure red at a full day
pub const HOURS_WORKED: BucketMap = BucketMap::new(&[
    (8.5, "#FF0000"),
    (8.0, "#FF0000"),
    (7.5, "#D9534F"),
    (7.0, "#EC6B4E"),
    (6.5, "#F07848"),
    (6.0, "#F28445"),
    (5.5, "#F49142"),
    (5.0, "#F6964C"),
    (4.5, "#F7A352"),
    (4.0, "#F8AD58"),
    (3.5, "#F8B665"),
    (3.0, "#F8BA6A"),
    (2.5, "#F8C077"),
    (2.0, "#F8C680"),
    (1.5, "#F8CB88"),
    (1.0, "#F8D091"),
    (0.5, "#F8D495"),
    (0.0, ""),
]);

/// Hours-worked color scale with its out-of-table overrides
///
/// Lookup is an exact bucket match first. Values that miss the table fall
/// back to `overtime` when above `overtime_after`, to `negative` when below
/// zero, and to no color otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursScale {
    /// Exact-match buckets
    pub buckets: BucketMap,
    /// Hours above which an unmatched value counts as overtime
    pub overtime_after: f64,
    /// Color for unmatched overtime values
    pub overtime: &'static str,
    /// Color for negative values (corrections, bad data)
    pub negative: &'static str,
}

impl HoursScale {
    /// The dashboard's built-in scale
    pub const DEFAULT: Self = Self {
        buckets: HOURS_WORKED,
        overtime_after: 8.0,
        overtime: "#ff0000",
        negative: "#a2079a",
    };

    /// Background color for `hours`, or `None` for no override
    #[must_use]
    pub fn color_for(&self, hours: f64) -> Option<&'static str> {
        if let Some(hex) = self.buckets.get(hours) {
            return Some(hex);
        }
        if hours > self.overtime_after {
            Some(self.overtime)
        } else if hours < 0.0 {
            Some(self.negative)
        } else {
            None
        }
    }
}

impl Default for HoursScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Background color for a day's worked hours on the built-in scale
#[must_use]
pub fn color_for_hours_worked(hours: f64) -> Option<&'static str> {
    HoursScale::DEFAULT.color_for(hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(8.5, Some("#FF0000"))]
    #[case(8.0, Some("#FF0000"))]
    #[case(7.5, Some("#D9534F"))]
    #[case(4.0, Some("#F8AD58"))]
    #[case(0.5, Some("#F8D495"))]
    #[case(9.0, Some("#ff0000"))]
    #[case(8.25, Some("#ff0000"))]
    #[case(-1.0, Some("#a2079a"))]
    #[case(-0.5, Some("#a2079a"))]
    #[case(4.3, None)]
    #[case(0.0, None)]
    #[case(0.25, None)]
    fn test_color_for_hours_worked(#[case] hours: f64, #[case] expected: Option<&str>) {
        assert_eq!(color_for_hours_worked(hours), expected);
    }

    #[test]
    fn test_custom_scale() {
        let scale = HoursScale {
            overtime_after: 6.0,
            overtime: "#000000",
            ..HoursScale::default()
        };
        assert_eq!(scale.color_for(6.5), Some("#F07848"));
        assert_eq!(scale.color_for(6.2), Some("#000000"));
        assert_eq!(scale.color_for(5.9), None);
    }

    #[test]
    fn test_table_covers_half_hours() {
        assert_eq!(HOURS_WORKED.len(), 18);
    }
}
