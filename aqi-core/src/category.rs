use serde::{Deserialize, Serialize};
use std::fmt;

/// India National AQI severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    VeryPoor,
    Severe,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Good,
        Category::Satisfactory,
        Category::Moderate,
        Category::Poor,
        Category::VeryPoor,
        Category::Severe,
    ];

    /// Human-readable band name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Satisfactory => "Satisfactory",
            Category::Moderate => "Moderate",
            Category::Poor => "Poor",
            Category::VeryPoor => "Very Poor",
            Category::Severe => "Severe",
        }
    }

    /// Badge color as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Good => "#009966",
            Category::Satisfactory => "#ffde33",
            Category::Moderate => "#ff9933",
            Category::Poor => "#cc0033",
            Category::VeryPoor => "#660099",
            Category::Severe => "#7e0023",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map an AQI value to its severity band. Upper bounds are inclusive.
///
/// The value is not range checked: anything at or below 50, negatives
/// included, lands in `Good`. Reject bad input before calling this.
pub fn classify(aqi: f64) -> Category {
    if aqi <= 50.0 {
        Category::Good
    } else if aqi <= 100.0 {
        Category::Satisfactory
    } else if aqi <= 200.0 {
        Category::Moderate
    } else if aqi <= 300.0 {
        Category::Poor
    } else if aqi <= 400.0 {
        Category::VeryPoor
    } else {
        Category::Severe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(aqi: f64) -> (&'static str, &'static str) {
        let category = classify(aqi);
        (category.label(), category.color())
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(pair(0.0), ("Good", "#009966"));
        assert_eq!(pair(50.0), ("Good", "#009966"));
        assert_eq!(pair(51.0), ("Satisfactory", "#ffde33"));
        assert_eq!(pair(100.0), ("Satisfactory", "#ffde33"));
        assert_eq!(pair(101.0), ("Moderate", "#ff9933"));
        assert_eq!(pair(200.0), ("Moderate", "#ff9933"));
        assert_eq!(pair(201.0), ("Poor", "#cc0033"));
        assert_eq!(pair(300.0), ("Poor", "#cc0033"));
        assert_eq!(pair(301.0), ("Very Poor", "#660099"));
        assert_eq!(pair(400.0), ("Very Poor", "#660099"));
        assert_eq!(pair(401.0), ("Severe", "#7e0023"));
        assert_eq!(pair(500.0), ("Severe", "#7e0023"));
    }

    #[test]
    fn test_fractional_values_use_inclusive_upper_bound() {
        assert_eq!(classify(50.5), Category::Satisfactory);
        assert_eq!(classify(100.0), Category::Satisfactory);
        assert_eq!(classify(100.01), Category::Moderate);
    }

    #[test]
    fn test_unvalidated_inputs() {
        // Negative readings are not rejected here.
        assert_eq!(classify(-25.0), Category::Good);
        assert_eq!(classify(10_000.0), Category::Severe);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::VeryPoor.to_string(), "Very Poor");
        assert_eq!(Category::ALL.len(), 6);
    }
}
