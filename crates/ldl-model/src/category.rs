//! LDL-C reference bands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// LDL-C category, ordered from lowest to highest band.
///
/// | Band | Range (mg/dL) |
/// |---|---|
/// | Optimal | < 100 |
/// | Near Optimal | 100-129 |
/// | Borderline High | 130-159 |
/// | High | 160-189 |
/// | Very High | ≥ 190 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Optimal,
    NearOptimal,
    BorderlineHigh,
    High,
    VeryHigh,
}

impl Category {
    /// All bands in ascending order.
    pub const ALL: [Category; 5] = [
        Category::Optimal,
        Category::NearOptimal,
        Category::BorderlineHigh,
        Category::High,
        Category::VeryHigh,
    ];

    /// Display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::NearOptimal => "Near Optimal",
            Self::BorderlineHigh => "Borderline High",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Colour hint for on-screen presentation.
    pub const fn color_token(&self) -> &'static str {
        match self {
            Self::Optimal => "green-700",
            Self::NearOptimal => "green-600",
            Self::BorderlineHigh => "orange-600",
            Self::High => "red-600",
            Self::VeryHigh => "red-700",
        }
    }

    /// Hex RGB colour (without `#`) used for the result runs of the report.
    pub const fn report_color(&self) -> &'static str {
        match self {
            Self::Optimal | Self::NearOptimal => "15803d",
            Self::BorderlineHigh => "ea580c",
            Self::High | Self::VeryHigh => "dc2626",
        }
    }

    /// Range text shown in the reference table.
    pub const fn range_label(&self) -> &'static str {
        match self {
            Self::Optimal => "< 100 mg/dL",
            Self::NearOptimal => "100-129 mg/dL",
            Self::BorderlineHigh => "130-159 mg/dL",
            Self::High => "160-189 mg/dL",
            Self::VeryHigh => "≥ 190 mg/dL",
        }
    }

    /// Inclusive lower bound of the band, `None` for the open lowest band.
    pub const fn lower_bound(&self) -> Option<f64> {
        match self {
            Self::Optimal => None,
            Self::NearOptimal => Some(100.0),
            Self::BorderlineHigh => Some(130.0),
            Self::High => Some(160.0),
            Self::VeryHigh => Some(190.0),
        }
    }

    /// Exclusive upper bound of the band, `None` for the open highest band.
    pub const fn upper_bound(&self) -> Option<f64> {
        match self {
            Self::Optimal => Some(100.0),
            Self::NearOptimal => Some(130.0),
            Self::BorderlineHigh => Some(160.0),
            Self::High => Some(190.0),
            Self::VeryHigh => None,
        }
    }

    /// True when `value` lies inside this band's bounds.
    pub fn contains(&self, value: f64) -> bool {
        let above = self.lower_bound().is_none_or(|low| value >= low);
        let below = self.upper_bound().is_none_or(|high| value < high);
        above && below
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_contiguous() {
        for pair in Category::ALL.windows(2) {
            assert_eq!(pair[0].upper_bound(), pair[1].lower_bound());
        }
        assert!(Category::ALL[0].lower_bound().is_none());
        assert!(Category::ALL[4].upper_bound().is_none());
    }

    #[test]
    fn test_contains_boundaries() {
        assert!(Category::Optimal.contains(99.9));
        assert!(!Category::Optimal.contains(100.0));
        assert!(Category::NearOptimal.contains(100.0));
        assert!(Category::VeryHigh.contains(190.0));
        assert!(Category::VeryHigh.contains(1_000.0));
    }

    #[test]
    fn test_report_colors_follow_severity() {
        assert_eq!(
            Category::Optimal.report_color(),
            Category::NearOptimal.report_color()
        );
        assert_eq!(Category::High.report_color(), Category::VeryHigh.report_color());
        assert_ne!(
            Category::BorderlineHigh.report_color(),
            Category::High.report_color()
        );
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&Category::BorderlineHigh).unwrap();
        assert_eq!(json, "\"borderline_high\"");
        assert_eq!(Category::NearOptimal.to_string(), "Near Optimal");
    }
}
