//! Plant recommendations from the command line.

use crate::query::{fetch_place, print_outcome};
use aqi_core::config::Settings;
use aqi_core::predictor::PredictorClient;
use aqi_core::recommend::{request_recommendations, RecommendationReport};
use aqi_core::MeasurementVector;
use log::info;

/// Build a measurement vector (fetched for `place`, or read from the JSON
/// file at `input`) and print the recommendation report.
pub async fn run_recommend(place: Option<&str>, input: Option<&str>) -> anyhow::Result<()> {
    let measurements = match (place, input) {
        (Some(place), _) => {
            let outcome = fetch_place(place).await?;
            print_outcome(&outcome)?;
            println!();
            outcome.measurements
        }
        (None, Some(path)) => read_measurements(path).await?,
        (None, None) => anyhow::bail!("either --place or --input is required"),
    };

    let settings = Settings::from_env()?;
    let predictor = PredictorClient::new(&settings)?;
    info!("Requesting recommendations from {}", settings.predict_url);
    let report = request_recommendations(&predictor, &measurements).await;
    println!("{}", format_report(&report)?);
    Ok(())
}

async fn read_measurements(path: &str) -> anyhow::Result<MeasurementVector> {
    let raw = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("Failed to parse measurements in {}: {}", path, e))
}

/// Render a successful report as plain text. A failed report becomes the
/// error, so its message is reported once by the caller.
pub fn format_report(report: &RecommendationReport) -> anyhow::Result<String> {
    if let Some(message) = &report.message {
        anyhow::bail!("{}", message);
    }

    let mut lines = Vec::new();
    if let Some(badge) = &report.badge {
        lines.push(badge.text());
    }
    lines.push("Recommended Plants:".to_string());
    for item in report.items() {
        lines.push(format!("  - {}", item));
    }
    if !report.all_chart.is_empty() {
        lines.push("All predictions (high to low):".to_string());
        for bar in report.all_chart.bars.iter().rev() {
            lines.push(format!("  {:<24} {:.3}", bar.label, bar.value));
        }
    }
    Ok(lines.join("\n"))
}
