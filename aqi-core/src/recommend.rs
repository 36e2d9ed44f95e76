//! Plant recommendations from the remote prediction endpoint.
//!
//! [`request_recommendations`] sends a measurement vector through a
//! [`PredictionSource`] and turns the answer into a [`RecommendationReport`]:
//! the badge, the ranked list and the two chart models the dashboard shows.
//! Every failure yields a message and two empty charts.

use crate::category::classify;
use crate::chart::{Bar, BarChart, Orientation};
use crate::error::{AqiError, Result};
use crate::measurement::{format_value, MeasurementVector};
use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_LABEL: &str = "Unknown";
pub const UNKNOWN_COLOR: &str = "#999999";

/// One ranked plant suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub plant: String,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Recommendation {
    /// List entry, e.g. `Neem (82.5%)`.
    pub fn display(&self) -> String {
        format!("{} ({:.1}%)", self.plant, self.confidence * 100.0)
    }
}

/// Body returned by the prediction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub all_predictions: Vec<Recommendation>,
}

/// The remote classifier.
#[allow(async_fn_in_trait)]
pub trait PredictionSource {
    async fn predict(&self, measurements: &MeasurementVector) -> Result<PredictionResponse>;
}

/// AQI badge shown above the recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiBadge {
    pub aqi: Option<f64>,
    pub label: String,
    pub color: String,
}

impl AqiBadge {
    /// Classify the vector's AQI. A missing or zero AQI shows as unknown.
    pub fn for_aqi(aqi: Option<f64>) -> Self {
        match aqi.filter(|v| *v != 0.0) {
            Some(value) => {
                let category = classify(value);
                Self {
                    aqi: Some(value),
                    label: category.label().to_string(),
                    color: category.color().to_string(),
                }
            }
            None => Self {
                aqi,
                label: UNKNOWN_LABEL.to_string(),
                color: UNKNOWN_COLOR.to_string(),
            },
        }
    }

    pub fn text(&self) -> String {
        let value = self
            .aqi
            .map(format_value)
            .unwrap_or_else(|| "N/A".to_string());
        format!("AQI: {} ({})", value, self.label)
    }
}

/// Everything the dashboard renders after a prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Failure text; `None` on success.
    pub message: Option<String>,
    pub badge: Option<AqiBadge>,
    pub recommendations: Vec<Recommendation>,
    pub top_chart: BarChart,
    pub all_chart: BarChart,
}

impl RecommendationReport {
    /// A failed request: message only, both charts empty.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            badge: None,
            recommendations: Vec::new(),
            top_chart: BarChart::empty(),
            all_chart: BarChart::empty(),
        }
    }

    /// Build the report for a successful response.
    pub fn from_response(response: PredictionResponse, aqi: Option<f64>) -> Self {
        if response.recommendations.is_empty() {
            return Self::failed("No prediction returned.");
        }

        let top_chart = top_chart(&response.recommendations);
        let all_chart = all_predictions_chart(&response.all_predictions);

        Self {
            message: None,
            badge: Some(AqiBadge::for_aqi(aqi)),
            recommendations: response.recommendations,
            top_chart,
            all_chart,
        }
    }

    pub fn is_success(&self) -> bool {
        self.message.is_none()
    }

    /// Ranked list entries for display.
    pub fn items(&self) -> Vec<String> {
        self.recommendations.iter().map(Recommendation::display).collect()
    }
}

/// Vertical bars, one color per plant, in the order returned.
pub fn top_chart(recommendations: &[Recommendation]) -> BarChart {
    BarChart::new(
        "Top 3 Recommended Plants",
        Orientation::Vertical,
        "Plant",
        "Confidence",
    )
    .with_bars(to_bars(recommendations))
    .colored_by_category()
}

/// Horizontal bars sorted from lowest to highest confidence.
pub fn all_predictions_chart(predictions: &[Recommendation]) -> BarChart {
    let mut sorted = predictions.to_vec();
    sorted.sort_by(|a, b| a.confidence.total_cmp(&b.confidence));
    BarChart::new(
        "All Plant Predictions (Low to High Confidence)",
        Orientation::Horizontal,
        "Plant",
        "Confidence",
    )
    .with_bars(to_bars(&sorted))
    .with_height(600)
}

fn to_bars(recommendations: &[Recommendation]) -> Vec<Bar> {
    recommendations
        .iter()
        .map(|r| Bar {
            label: r.plant.clone(),
            value: r.confidence,
        })
        .collect()
}

/// Ask the prediction endpoint for plant recommendations.
pub async fn request_recommendations<P: PredictionSource>(
    source: &P,
    measurements: &MeasurementVector,
) -> RecommendationReport {
    info!(
        "Requesting recommendations for {} populated fields",
        measurements.populated_count()
    );
    match source.predict(measurements).await {
        Ok(response) => {
            info!(
                "Prediction returned {} recommendations, {} predictions",
                response.recommendations.len(),
                response.all_predictions.len()
            );
            RecommendationReport::from_response(response, measurements.aqi)
        }
        Err(AqiError::Status(status)) => {
            warn!("Prediction endpoint returned {}", status);
            RecommendationReport::failed(format!("Prediction failed: {}", status))
        }
        Err(e) => {
            warn!("Prediction request failed: {}", e);
            RecommendationReport::failed(format!("Error: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePredictor {
        response: std::result::Result<PredictionResponse, u16>,
        seen: RefCell<Vec<MeasurementVector>>,
    }

    impl FakePredictor {
        fn answering(response: PredictionResponse) -> Self {
            Self {
                response: Ok(response),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                response: Err(status),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl PredictionSource for FakePredictor {
        async fn predict(&self, measurements: &MeasurementVector) -> Result<PredictionResponse> {
            self.seen.borrow_mut().push(measurements.clone());
            match &self.response {
                Ok(r) => Ok(r.clone()),
                Err(0) => Err(AqiError::EmptyResponse("prediction endpoint")),
                Err(status) => Err(AqiError::Status(*status)),
            }
        }
    }

    fn rec(plant: &str, confidence: f64) -> Recommendation {
        Recommendation {
            plant: plant.to_string(),
            confidence,
        }
    }

    fn sample_response() -> PredictionResponse {
        PredictionResponse {
            recommendations: vec![rec("Neem", 0.825), rec("Peepal", 0.1), rec("Tulsi", 0.05)],
            all_predictions: vec![
                rec("Neem", 0.825),
                rec("Areca Palm", 0.0),
                rec("Tulsi", 0.05),
                rec("Peepal", 0.1),
            ],
        }
    }

    fn vector_with_aqi(aqi: Option<f64>) -> MeasurementVector {
        MeasurementVector {
            pm2_5: Some(45.0),
            pm10: Some(120.0),
            aqi,
            ..MeasurementVector::default()
        }
    }

    #[tokio::test]
    async fn test_successful_report() {
        let predictor = FakePredictor::answering(sample_response());
        let vector = vector_with_aqi(Some(114.0));
        let report = request_recommendations(&predictor, &vector).await;

        assert!(report.is_success());
        assert_eq!(predictor.seen.borrow().as_slice(), &[vector]);

        let badge = report.badge.as_ref().unwrap();
        assert_eq!(badge.text(), "AQI: 114 (Moderate)");
        assert_eq!(badge.color, "#ff9933");

        assert_eq!(
            report.items(),
            vec!["Neem (82.5%)", "Peepal (10.0%)", "Tulsi (5.0%)"]
        );

        assert_eq!(report.top_chart.orientation, Orientation::Vertical);
        assert!(report.top_chart.color_by_category);
        let top: Vec<&str> = report.top_chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(top, vec!["Neem", "Peepal", "Tulsi"]);

        assert_eq!(report.all_chart.orientation, Orientation::Horizontal);
        assert_eq!(report.all_chart.height, Some(600));
        let all: Vec<f64> = report.all_chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(all, vec![0.0, 0.05, 0.1, 0.825]);
    }

    #[tokio::test]
    async fn test_non_success_status_leaves_charts_empty() {
        let predictor = FakePredictor::failing(500);
        let report = request_recommendations(&predictor, &vector_with_aqi(Some(80.0))).await;

        assert_eq!(report.message.as_deref(), Some("Prediction failed: 500"));
        assert!(report.badge.is_none());
        assert!(report.items().is_empty());
        assert!(report.top_chart.is_empty());
        assert!(report.all_chart.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_is_surfaced_with_text() {
        let predictor = FakePredictor::failing(0);
        let report = request_recommendations(&predictor, &vector_with_aqi(None)).await;

        assert_eq!(
            report.message.as_deref(),
            Some("Error: Empty response from prediction endpoint")
        );
        assert!(report.top_chart.is_empty());
        assert!(report.all_chart.is_empty());
    }

    #[tokio::test]
    async fn test_empty_recommendations() {
        let predictor = FakePredictor::answering(PredictionResponse {
            recommendations: Vec::new(),
            all_predictions: vec![rec("Neem", 0.9)],
        });
        let report = request_recommendations(&predictor, &vector_with_aqi(Some(40.0))).await;

        assert_eq!(report.message.as_deref(), Some("No prediction returned."));
        assert!(report.top_chart.is_empty());
        assert!(report.all_chart.is_empty());
    }

    #[test]
    fn test_badge_without_aqi_is_unknown() {
        let missing = AqiBadge::for_aqi(None);
        assert_eq!(missing.text(), "AQI: N/A (Unknown)");
        assert_eq!(missing.color, UNKNOWN_COLOR);

        let zero = AqiBadge::for_aqi(Some(0.0));
        assert_eq!(zero.label, UNKNOWN_LABEL);
        assert_eq!(zero.text(), "AQI: 0 (Unknown)");
    }

    #[test]
    fn test_badge_classifies_fractional_aqi() {
        let badge = AqiBadge::for_aqi(Some(50.5));
        assert_eq!(badge.text(), "AQI: 50.5 (Satisfactory)");
        assert_eq!(badge.color, "#ffde33");
    }

    #[test]
    fn test_response_parses_with_missing_lists() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"recommendations": [{"plant": "Neem", "confidence": 0.7}]}"#)
                .unwrap();
        assert_eq!(response.recommendations.len(), 1);
        assert!(response.all_predictions.is_empty());
    }
}
