//! Live measurement fetching from the command line.

use aqi_core::config::Settings;
use aqi_core::fetch::{fetch_by_location, fetch_by_place, FetchOutcome};
use aqi_core::openweather::OpenWeatherClient;
use aqi_core::sampler::RngSampler;
use log::info;

/// Fetch measurements for a named place and print them.
pub async fn run_fetch(place: &str) -> anyhow::Result<()> {
    let outcome = fetch_place(place).await?;
    print_outcome(&outcome)
}

/// Fetch measurements for this machine's IP location and print them.
pub async fn run_locate() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    let client = OpenWeatherClient::new(&settings)?;
    let outcome = fetch_by_location(&client, &mut RngSampler::from_entropy()).await;
    print_outcome(&outcome)
}

/// Run the fetcher for `place` with settings from the environment.
pub async fn fetch_place(place: &str) -> anyhow::Result<FetchOutcome> {
    let settings = Settings::from_env()?;
    let client = OpenWeatherClient::new(&settings)?;
    info!("Fetching measurements for {}", place);
    Ok(fetch_by_place(&client, place, &mut RngSampler::from_entropy()).await)
}

/// Render an outcome as the status line, the attribution (on success) and
/// the measurement vector as pretty JSON, keyed the way the prediction
/// service expects.
pub fn format_outcome(outcome: &FetchOutcome) -> String {
    let mut lines = vec![outcome.status.message()];
    if let Some(note) = outcome.status.source_note() {
        lines.push(note.to_string());
    }
    let json = serde_json::to_string_pretty(&outcome.measurements)
        .unwrap_or_else(|e| format!("<unserializable measurements: {}>", e));
    lines.push(json);
    lines.join("\n")
}

/// Print a successful outcome; a failed one becomes the error.
pub fn print_outcome(outcome: &FetchOutcome) -> anyhow::Result<()> {
    if !outcome.is_success() {
        anyhow::bail!("{}", outcome.status);
    }
    println!("{}", format_outcome(outcome));
    Ok(())
}
