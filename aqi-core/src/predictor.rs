//! HTTP client for the remote plant prediction endpoint.

use crate::config::Settings;
use crate::error::Result;
use crate::measurement::MeasurementVector;
use crate::openweather::{http_client, success_body};
use crate::recommend::{PredictionResponse, PredictionSource};
use log::debug;
use reqwest::Client;

/// Prediction source that POSTs the measurement vector as JSON.
#[derive(Clone)]
pub struct PredictorClient {
    client: Client,
    url: String,
}

impl PredictorClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: http_client(settings)?,
            url: settings.predict_url.clone(),
        })
    }
}

impl PredictionSource for PredictorClient {
    async fn predict(&self, measurements: &MeasurementVector) -> Result<PredictionResponse> {
        debug!("POST {}", self.url);
        let response = self.client.post(&self.url).json(measurements).send().await?;
        let body = success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
