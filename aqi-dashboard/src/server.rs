//! Server functions. HTTP calls to OpenWeather and the prediction service
//! run on the dashboard server so the API key never reaches the browser.

use aqi_core::fetch::FetchOutcome;
use aqi_core::recommend::RecommendationReport;
use aqi_core::MeasurementVector;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Server-side settings the client needs at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    pub auto_locate: bool,
}

#[server]
pub async fn dashboard_options() -> Result<DashboardOptions, ServerFnError> {
    let settings = load_settings()?;
    Ok(DashboardOptions {
        auto_locate: settings.auto_locate,
    })
}

/// Fetch readings for a named place.
#[server]
pub async fn fetch_place(place: String) -> Result<FetchOutcome, ServerFnError> {
    let settings = load_settings()?;
    let client = aqi_core::openweather::OpenWeatherClient::new(&settings).map_err(server_error)?;
    let mut sampler = aqi_core::sampler::RngSampler::from_entropy();
    let outcome = aqi_core::fetch::fetch_by_place(&client, &place, &mut sampler).await;
    log::info!("Fetch for {:?}: {}", place, outcome.status);
    Ok(outcome)
}

/// Fetch readings for the location resolved by IP geolocation.
#[server]
pub async fn fetch_location() -> Result<FetchOutcome, ServerFnError> {
    let settings = load_settings()?;
    let client = aqi_core::openweather::OpenWeatherClient::new(&settings).map_err(server_error)?;
    let mut sampler = aqi_core::sampler::RngSampler::from_entropy();
    let outcome = aqi_core::fetch::fetch_by_location(&client, &mut sampler).await;
    log::info!("Located fetch: {}", outcome.status);
    Ok(outcome)
}

/// Ask the prediction service for plant recommendations.
#[server]
pub async fn recommend(
    measurements: MeasurementVector,
) -> Result<RecommendationReport, ServerFnError> {
    let settings = load_settings()?;
    let predictor = aqi_core::predictor::PredictorClient::new(&settings).map_err(server_error)?;
    let report = aqi_core::recommend::request_recommendations(&predictor, &measurements).await;
    if let Some(message) = &report.message {
        log::warn!("Recommendation request failed: {}", message);
    }
    Ok(report)
}

#[cfg(feature = "server")]
fn load_settings() -> Result<aqi_core::config::Settings, ServerFnError> {
    aqi_core::config::Settings::from_env().map_err(server_error)
}

#[cfg(feature = "server")]
fn server_error(err: aqi_core::AqiError) -> ServerFnError {
    log::error!("{}", err);
    ServerFnError::new(err.to_string())
}

/// Export `HOST`/`PORT` as the `IP`/`PORT` pair the fullstack server binds to.
#[cfg(feature = "server")]
pub fn apply_listen_address() {
    match aqi_core::config::Settings::from_env() {
        Ok(settings) => {
            log::info!("Serving dashboard on {}", settings.listen_address());
            std::env::set_var("IP", &settings.host);
            std::env::set_var("PORT", settings.port.to_string());
        }
        Err(err) => log::error!("Invalid configuration, using server defaults: {}", err),
    }
}
