//! OpenWeather geocoding / air-pollution client and IP geolocation.

use crate::config::Settings;
use crate::error::{AqiError, Result};
use crate::fetch::{AirQualitySource, Place, PollutionComponents};
use log::debug;
use reqwest::{Client, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GeocodeEntry {
    lat: f64,
    lon: f64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    #[serde(default)]
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    components: PollutionComponents,
}

#[derive(Debug, Deserialize)]
struct IpLocation {
    loc: Option<String>,
    city: Option<String>,
}

/// Parse a geocoding body (`[{lat, lon, name}]`); the first match wins.
pub fn parse_geocode(body: &str) -> Result<Option<Place>> {
    let entries: Vec<GeocodeEntry> = serde_json::from_str(body)?;
    Ok(entries.into_iter().next().map(|e| Place {
        lat: e.lat,
        lon: e.lon,
        name: e.name,
    }))
}

/// Parse an air-pollution body (`{list: [{components: {...}}]}`).
pub fn parse_air_pollution(body: &str) -> Result<PollutionComponents> {
    let response: AirPollutionResponse = serde_json::from_str(body)?;
    response
        .list
        .into_iter()
        .next()
        .map(|entry| entry.components)
        .ok_or(AqiError::EmptyResponse("air pollution service"))
}

/// Parse an IP geolocation body (`{loc: "lat,lon", city}`).
pub fn parse_ip_location(body: &str) -> Result<Place> {
    let location: IpLocation = serde_json::from_str(body)?;
    let loc = location
        .loc
        .ok_or_else(|| AqiError::InvalidLocation("response has no loc field".to_string()))?;
    let (lat, lon) = parse_coordinates(&loc)?;
    Ok(Place {
        lat,
        lon,
        name: location.city.unwrap_or_else(|| loc.clone()),
    })
}

/// Split `"lat,lon"` into coordinates.
pub fn parse_coordinates(loc: &str) -> Result<(f64, f64)> {
    let invalid = || AqiError::InvalidLocation(loc.to_string());
    let (lat, lon) = loc.split_once(',').ok_or_else(invalid)?;
    let lat = lat.trim().parse::<f64>().map_err(|_| invalid())?;
    let lon = lon.trim().parse::<f64>().map_err(|_| invalid())?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(invalid());
    }
    Ok((lat, lon))
}

/// Read the body of a successful response, or fail with its status.
pub(crate) async fn success_body(response: Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(AqiError::Status(status.as_u16()));
    }
    Ok(response.text().await?)
}

/// Build a reqwest client with the configured finite timeout.
pub(crate) fn http_client(settings: &Settings) -> Result<Client> {
    Ok(Client::builder().timeout(settings.http_timeout).build()?)
}

/// Air-quality source backed by the OpenWeather APIs.
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: Option<String>,
    geocode_url: String,
    air_pollution_url: String,
    ip_geolocation_url: String,
}

impl OpenWeatherClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: http_client(settings)?,
            api_key: settings.openweather_api_key.clone(),
            geocode_url: settings.geocode_url.clone(),
            air_pollution_url: settings.air_pollution_url.clone(),
            ip_geolocation_url: settings.ip_geolocation_url.clone(),
        })
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(AqiError::MissingApiKey)
    }
}

impl AirQualitySource for OpenWeatherClient {
    async fn geocode(&self, place: &str) -> Result<Option<Place>> {
        let key = self.api_key()?;
        debug!("GET {} q={}", self.geocode_url, place);
        let response = self
            .client
            .get(&self.geocode_url)
            .query(&[("q", place), ("limit", "1"), ("appid", key)])
            .send()
            .await?;
        parse_geocode(&success_body(response).await?)
    }

    async fn locate(&self) -> Result<Place> {
        debug!("GET {}", self.ip_geolocation_url);
        let response = self.client.get(&self.ip_geolocation_url).send().await?;
        parse_ip_location(&success_body(response).await?)
    }

    async fn components(&self, lat: f64, lon: f64) -> Result<PollutionComponents> {
        let key = self.api_key()?;
        debug!("GET {} lat={} lon={}", self.air_pollution_url, lat, lon);
        let response = self
            .client
            .get(&self.air_pollution_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", key.to_string()),
            ])
            .send()
            .await?;
        parse_air_pollution(&success_body(response).await?)
    }
}
