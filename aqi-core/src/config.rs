//! Process configuration read from environment variables.

use crate::error::{AqiError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_GEOCODE_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
pub const DEFAULT_AIR_POLLUTION_URL: &str = "https://api.openweathermap.org/data/2.5/air_pollution";
pub const DEFAULT_IP_GEOLOCATION_URL: &str = "https://ipinfo.io/json";
pub const DEFAULT_PREDICT_URL: &str =
    "https://fastapi-voting-based-model-api-for-plant.onrender.com/predict";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// Runtime settings shared by the CLI and the dashboard server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub openweather_api_key: Option<String>,
    pub geocode_url: String,
    pub air_pollution_url: String,
    pub ip_geolocation_url: String,
    pub predict_url: String,
    pub http_timeout: Duration,
    /// Offer (and run on load) the IP-geolocation fetch.
    pub auto_locate: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            openweather_api_key: None,
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            air_pollution_url: DEFAULT_AIR_POLLUTION_URL.to_string(),
            ip_geolocation_url: DEFAULT_IP_GEOLOCATION_URL.to_string(),
            predict_url: DEFAULT_PREDICT_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            auto_locate: false,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup. Unset and blank
    /// variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Settings::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| AqiError::Config {
                name: "PORT",
                reason: format!("{raw:?}: {e}"),
            })?,
            None => defaults.port,
        };

        let http_timeout = match get("AQI_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| AqiError::Config {
                    name: "AQI_HTTP_TIMEOUT_SECS",
                    reason: format!("{raw:?}: {e}"),
                })?;
                if secs == 0 {
                    return Err(AqiError::Config {
                        name: "AQI_HTTP_TIMEOUT_SECS",
                        reason: "timeout must be at least one second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.http_timeout,
        };

        let auto_locate = match get("AQI_AUTO_LOCATE") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| AqiError::Config {
                name: "AQI_AUTO_LOCATE",
                reason: format!("{raw:?} is not a boolean"),
            })?,
            None => defaults.auto_locate,
        };

        Ok(Settings {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            openweather_api_key: get("OWM_API_KEY"),
            geocode_url: get("AQI_GEOCODE_URL").unwrap_or(defaults.geocode_url),
            air_pollution_url: get("AQI_AIR_POLLUTION_URL").unwrap_or(defaults.air_pollution_url),
            ip_geolocation_url: get("AQI_IP_GEOLOCATION_URL")
                .unwrap_or(defaults.ip_geolocation_url),
            predict_url: get("AQI_PREDICT_URL").unwrap_or(defaults.predict_url),
            http_timeout,
            auto_locate,
        })
    }

    /// `host:port` for the listening socket.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
