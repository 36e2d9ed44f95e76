//! Bar chart models handed to the D3.js renderer as JSON.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Categories on the x axis, values up the y axis.
    Vertical,
    /// Categories on the y axis, values along the x axis.
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    pub title: String,
    pub orientation: Orientation,
    pub category_label: String,
    pub value_label: String,
    pub bars: Vec<Bar>,
    /// Fixed value axis domain.
    pub value_range: (f64, f64),
    /// Pixel height; the renderer picks one when unset.
    pub height: Option<u32>,
    /// Give each category its own color.
    pub color_by_category: bool,
}

impl BarChart {
    pub fn new(
        title: &str,
        orientation: Orientation,
        category_label: &str,
        value_label: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            orientation,
            category_label: category_label.to_string(),
            value_label: value_label.to_string(),
            bars: Vec::new(),
            value_range: (0.0, 1.0),
            height: None,
            color_by_category: false,
        }
    }

    /// A chart with no bars: rendered as an empty placeholder.
    pub fn empty() -> Self {
        Self::new("", Orientation::Vertical, "", "")
    }

    pub fn with_bars(mut self, bars: Vec<Bar>) -> Self {
        self.bars = bars;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn colored_by_category(mut self) -> Self {
        self.color_by_category = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// JSON for the `renderBarChart` bridge function.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for BarChart {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chart() {
        let chart = BarChart::empty();
        assert!(chart.is_empty());
        assert_eq!(chart.value_range, (0.0, 1.0));
    }

    #[test]
    fn test_json_shape_for_renderer() {
        let chart = BarChart::new("Top", Orientation::Horizontal, "Plant", "Confidence")
            .with_bars(vec![Bar {
                label: "Neem".to_string(),
                value: 0.5,
            }])
            .with_height(600)
            .colored_by_category();
        let json: serde_json::Value = serde_json::from_str(&chart.to_json()).unwrap();
        assert_eq!(json["orientation"], "horizontal");
        assert_eq!(json["categoryLabel"], "Plant");
        assert_eq!(json["valueLabel"], "Confidence");
        assert_eq!(json["valueRange"], serde_json::json!([0.0, 1.0]));
        assert_eq!(json["height"], 600);
        assert_eq!(json["colorByCategory"], true);
        assert_eq!(json["bars"][0]["label"], "Neem");
    }
}
