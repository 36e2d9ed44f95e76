//! Measurement fetching: place name (or IP location) to a full vector.
//!
//! The HTTP side lives behind [`AirQualitySource`]; this module owns the
//! flow, the fill-in rules for unreported pollutants, and the guarantee that
//! a failed fetch never yields a half-populated vector.

use crate::breakpoint::aqi;
use crate::error::{AqiError, Result};
use crate::measurement::{round2, MeasurementVector};
use crate::sampler::{
    PollutantSampler, BENZENE_RANGE, CO_RANGE, NO_RANGE, TOLUENE_RANGE, XYLENE_RANGE,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

/// Pollutant concentrations as reported by the air-pollution service.
/// Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollutionComponents {
    pub co: Option<f64>,
    pub no: Option<f64>,
    pub no2: Option<f64>,
    pub nox: Option<f64>,
    pub o3: Option<f64>,
    pub so2: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub nh3: Option<f64>,
}

/// Remote services the fetcher depends on.
#[allow(async_fn_in_trait)]
pub trait AirQualitySource {
    /// Resolve a place name; `Ok(None)` when the geocoder has no match.
    async fn geocode(&self, place: &str) -> Result<Option<Place>>;

    /// Resolve the caller's location from its public IP.
    async fn locate(&self) -> Result<Place>;

    /// Current pollutant concentrations at a coordinate.
    async fn components(&self, lat: f64, lon: f64) -> Result<PollutionComponents>;
}

/// How a fetch ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FetchStatus {
    Fetched { place: String },
    MissingPlace,
    PlaceNotFound(String),
    LocationUnavailable(String),
    /// The air-quality service answered with a non-success status.
    Failed,
    /// Transport or parse failure, with the error text.
    Error(String),
}

impl FetchStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchStatus::Fetched { .. })
    }

    /// Status line shown above the dashboard.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Attribution shown under the charts; only set on success.
    pub fn source_note(&self) -> Option<&'static str> {
        match self {
            FetchStatus::Fetched { .. } => Some("Data from OpenWeather API"),
            _ => None,
        }
    }

    fn from_error(err: &AqiError) -> Self {
        match err {
            AqiError::Status(_) => FetchStatus::Failed,
            other => FetchStatus::Error(other.to_string()),
        }
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Fetched { place } => write!(f, "Data from: {}", place),
            FetchStatus::MissingPlace => f.write_str("Missing city name."),
            FetchStatus::PlaceNotFound(name) => write!(f, "City '{}' not found.", name),
            FetchStatus::LocationUnavailable(reason) => {
                write!(f, "Could not determine your location: {}", reason)
            }
            FetchStatus::Failed => f.write_str("Failed to fetch air quality data."),
            FetchStatus::Error(text) => write!(f, "Error: {}", text),
        }
    }
}

/// Result of one fetch: either a complete vector or an empty one plus
/// the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchOutcome {
    pub measurements: MeasurementVector,
    pub status: FetchStatus,
}

impl FetchOutcome {
    fn fetched(measurements: MeasurementVector, place: String) -> Self {
        Self {
            measurements,
            status: FetchStatus::Fetched { place },
        }
    }

    /// A failed fetch: all thirteen fields cleared together.
    pub fn failed(status: FetchStatus) -> Self {
        Self {
            measurements: MeasurementVector::empty(),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Turn reported components into a complete measurement vector.
///
/// Values are rounded to two decimals. Unreported particulates and gases
/// default to zero. NO is synthesized when missing or zero. CO, benzene,
/// toluene and xylene are always synthesized since the service either does
/// not report them or reports CO in a unit the model was not trained on.
/// NOx is always NO + NO2, whatever the service says.
pub fn assemble_measurements<S: PollutantSampler>(
    components: &PollutionComponents,
    sampler: &mut S,
) -> MeasurementVector {
    let pm2_5 = round2(components.pm2_5.unwrap_or(0.0));
    let pm10 = round2(components.pm10.unwrap_or(0.0));
    let no = match components.no.map(round2) {
        Some(v) if v != 0.0 => v,
        _ => round2(sampler.sample(NO_RANGE)),
    };
    let no2 = round2(components.no2.unwrap_or(0.0));
    let nox = round2(no + no2);
    let nh3 = round2(components.nh3.unwrap_or(0.0));
    let co = round2(sampler.sample(CO_RANGE));
    let so2 = round2(components.so2.unwrap_or(0.0));
    let o3 = round2(components.o3.unwrap_or(0.0));
    let benzene = round2(sampler.sample(BENZENE_RANGE));
    let toluene = round2(sampler.sample(TOLUENE_RANGE));
    let xylene = round2(sampler.sample(XYLENE_RANGE));

    MeasurementVector {
        pm2_5: Some(pm2_5),
        pm10: Some(pm10),
        no: Some(no),
        no2: Some(no2),
        nox: Some(nox),
        nh3: Some(nh3),
        co: Some(co),
        so2: Some(so2),
        o3: Some(o3),
        benzene: Some(benzene),
        toluene: Some(toluene),
        xylene: Some(xylene),
        aqi: Some(f64::from(aqi(pm2_5, pm10))),
    }
}

/// Fetch measurements for a named place.
pub async fn fetch_by_place<A, S>(source: &A, place: &str, sampler: &mut S) -> FetchOutcome
where
    A: AirQualitySource,
    S: PollutantSampler,
{
    let place = place.trim();
    if place.is_empty() {
        return FetchOutcome::failed(FetchStatus::MissingPlace);
    }

    info!("Geocoding {}", place);
    let resolved = match source.geocode(place).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            warn!("No geocoding match for {}", place);
            return FetchOutcome::failed(FetchStatus::PlaceNotFound(place.to_string()));
        }
        Err(e) => {
            warn!("Geocoding {} failed: {}", place, e);
            return FetchOutcome::failed(FetchStatus::from_error(&e));
        }
    };

    fetch_at(source, resolved, sampler).await
}

/// Fetch measurements for wherever the caller's IP resolves to.
pub async fn fetch_by_location<A, S>(source: &A, sampler: &mut S) -> FetchOutcome
where
    A: AirQualitySource,
    S: PollutantSampler,
{
    info!("Resolving location from IP");
    let resolved = match source.locate().await {
        Ok(p) => p,
        Err(e) => {
            warn!("IP geolocation failed: {}", e);
            return FetchOutcome::failed(FetchStatus::LocationUnavailable(e.to_string()));
        }
    };

    fetch_at(source, resolved, sampler).await
}

async fn fetch_at<A, S>(source: &A, place: Place, sampler: &mut S) -> FetchOutcome
where
    A: AirQualitySource,
    S: PollutantSampler,
{
    debug!("Fetching air quality for {} ({}, {})", place.name, place.lat, place.lon);
    match source.components(place.lat, place.lon).await {
        Ok(components) => {
            let measurements = assemble_measurements(&components, sampler);
            info!(
                "Fetched air quality for {} (AQI {:?})",
                place.name, measurements.aqi
            );
            FetchOutcome::fetched(measurements, place.name)
        }
        Err(e) => {
            warn!("Air quality fetch for {} failed: {}", place.name, e);
            FetchOutcome::failed(FetchStatus::from_error(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Field;
    use crate::sampler::FallbackRange;
    use std::cell::Cell;

    /// Returns scripted values in order, ignoring the range.
    struct ScriptedSampler {
        values: Vec<f64>,
        calls: Vec<FallbackRange>,
    }

    impl ScriptedSampler {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                calls: Vec::new(),
            }
        }
    }

    impl PollutantSampler for ScriptedSampler {
        fn sample(&mut self, range: FallbackRange) -> f64 {
            self.calls.push(range);
            self.values.remove(0)
        }
    }

    enum Geocode {
        Found(Place),
        Missing,
        Fails(u16),
    }

    struct FakeSource {
        geocode: Geocode,
        locate: Option<Place>,
        components: std::result::Result<PollutionComponents, u16>,
        component_calls: Cell<usize>,
    }

    impl FakeSource {
        fn with_components(components: PollutionComponents) -> Self {
            Self {
                geocode: Geocode::Found(delhi()),
                locate: Some(delhi()),
                components: Ok(components),
                component_calls: Cell::new(0),
            }
        }
    }

    impl AirQualitySource for FakeSource {
        async fn geocode(&self, _place: &str) -> Result<Option<Place>> {
            match &self.geocode {
                Geocode::Found(p) => Ok(Some(p.clone())),
                Geocode::Missing => Ok(None),
                Geocode::Fails(status) => Err(AqiError::Status(*status)),
            }
        }

        async fn locate(&self) -> Result<Place> {
            self.locate
                .clone()
                .ok_or_else(|| AqiError::InvalidLocation("no loc field".to_string()))
        }

        async fn components(&self, _lat: f64, _lon: f64) -> Result<PollutionComponents> {
            self.component_calls.set(self.component_calls.get() + 1);
            match &self.components {
                Ok(c) => Ok(c.clone()),
                Err(0) => Err(AqiError::ResponseParse("expected value at line 1".to_string())),
                Err(status) => Err(AqiError::Status(*status)),
            }
        }
    }

    fn delhi() -> Place {
        Place {
            lat: 28.6517,
            lon: 77.2219,
            name: "Delhi".to_string(),
        }
    }

    fn reported() -> PollutionComponents {
        PollutionComponents {
            co: Some(1200.5),
            no: Some(3.456),
            no2: Some(20.111),
            nox: Some(999.0),
            o3: Some(45.0),
            so2: Some(8.2),
            pm2_5: Some(45.004),
            pm10: Some(120.0),
            nh3: Some(6.5),
        }
    }

    fn assert_all_cleared(outcome: &FetchOutcome) {
        assert_eq!(outcome.measurements.values().len(), 13);
        assert!(outcome.measurements.values().iter().all(Option::is_none));
        assert!(!outcome.status.message().is_empty());
        assert!(outcome.status.source_note().is_none());
    }

    #[test]
    fn test_assemble_uses_reported_values_and_samples_the_rest() {
        let mut sampler = ScriptedSampler::new(&[2.346, 3.0, 12.0, 4.444]);
        let vector = assemble_measurements(&reported(), &mut sampler);

        assert_eq!(vector.pm2_5, Some(45.0));
        assert_eq!(vector.pm10, Some(120.0));
        assert_eq!(vector.no, Some(3.46));
        assert_eq!(vector.no2, Some(20.11));
        assert_eq!(vector.nox, Some(23.57));
        assert_eq!(vector.nh3, Some(6.5));
        assert_eq!(vector.co, Some(2.35));
        assert_eq!(vector.so2, Some(8.2));
        assert_eq!(vector.o3, Some(45.0));
        assert_eq!(vector.benzene, Some(3.0));
        assert_eq!(vector.toluene, Some(12.0));
        assert_eq!(vector.xylene, Some(4.44));
        // PM2.5 45 -> 75, PM10 120 -> 114
        assert_eq!(vector.aqi, Some(114.0));
        assert_eq!(vector.populated_count(), 13);

        assert_eq!(
            sampler.calls,
            vec![CO_RANGE, BENZENE_RANGE, TOLUENE_RANGE, XYLENE_RANGE]
        );
    }

    #[test]
    fn test_assemble_samples_missing_or_zero_no() {
        let mut components = reported();
        components.no = None;
        let mut sampler = ScriptedSampler::new(&[10.0, 1.0, 1.0, 5.0, 1.0]);
        let vector = assemble_measurements(&components, &mut sampler);
        assert_eq!(vector.no, Some(10.0));
        assert_eq!(vector.nox, Some(30.11));
        assert_eq!(sampler.calls[0], NO_RANGE);

        components.no = Some(0.001);
        let mut sampler = ScriptedSampler::new(&[6.0, 1.0, 1.0, 5.0, 1.0]);
        let vector = assemble_measurements(&components, &mut sampler);
        assert_eq!(vector.no, Some(6.0));
    }

    #[test]
    fn test_assemble_defaults_missing_components_to_zero() {
        let mut sampler = ScriptedSampler::new(&[5.0, 1.0, 1.0, 5.0, 1.0]);
        let vector = assemble_measurements(&PollutionComponents::default(), &mut sampler);
        assert_eq!(vector.pm2_5, Some(0.0));
        assert_eq!(vector.pm10, Some(0.0));
        assert_eq!(vector.no2, Some(0.0));
        assert_eq!(vector.nox, Some(5.0));
        assert_eq!(vector.aqi, Some(0.0));
    }

    #[test]
    fn test_assemble_ignores_reported_nox() {
        let mut sampler = ScriptedSampler::new(&[1.0, 1.0, 5.0, 1.0]);
        let vector = assemble_measurements(&reported(), &mut sampler);
        assert_ne!(vector.nox, Some(999.0));
        assert_eq!(vector.nox, Some(round2(vector.no.unwrap() + vector.no2.unwrap())));
    }

    #[tokio::test]
    async fn test_fetch_by_place_success() {
        let source = FakeSource::with_components(reported());
        let mut sampler = ScriptedSampler::new(&[2.0, 3.0, 12.0, 4.0]);
        let outcome = fetch_by_place(&source, "  Delhi ", &mut sampler).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.status.message(), "Data from: Delhi");
        assert_eq!(
            outcome.status.source_note(),
            Some("Data from OpenWeather API")
        );
        assert_eq!(outcome.measurements.populated_count(), 13);
        assert_eq!(outcome.measurements.get(Field::Aqi), Some(114.0));
    }

    #[tokio::test]
    async fn test_missing_place_issues_no_request() {
        let source = FakeSource::with_components(reported());
        let mut sampler = ScriptedSampler::new(&[]);
        let outcome = fetch_by_place(&source, "   ", &mut sampler).await;

        assert_eq!(outcome.status, FetchStatus::MissingPlace);
        assert_eq!(outcome.status.message(), "Missing city name.");
        assert_all_cleared(&outcome);
        assert_eq!(source.component_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_geocode_miss_skips_air_quality_request() {
        let mut source = FakeSource::with_components(reported());
        source.geocode = Geocode::Missing;
        let mut sampler = ScriptedSampler::new(&[]);
        let outcome = fetch_by_place(&source, "Atlantis", &mut sampler).await;

        assert_eq!(outcome.status.message(), "City 'Atlantis' not found.");
        assert_all_cleared(&outcome);
        assert_eq!(source.component_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_non_success_status_reports_fetch_failure() {
        let mut source = FakeSource::with_components(reported());
        source.components = Err(503);
        let mut sampler = ScriptedSampler::new(&[]);
        let outcome = fetch_by_place(&source, "Delhi", &mut sampler).await;

        assert_eq!(outcome.status, FetchStatus::Failed);
        assert_eq!(outcome.status.message(), "Failed to fetch air quality data.");
        assert_all_cleared(&outcome);
    }

    #[tokio::test]
    async fn test_geocode_status_error_reports_fetch_failure() {
        let mut source = FakeSource::with_components(reported());
        source.geocode = Geocode::Fails(401);
        let mut sampler = ScriptedSampler::new(&[]);
        let outcome = fetch_by_place(&source, "Delhi", &mut sampler).await;

        assert_eq!(outcome.status, FetchStatus::Failed);
        assert_all_cleared(&outcome);
    }

    #[tokio::test]
    async fn test_parse_error_is_surfaced_with_text() {
        let mut source = FakeSource::with_components(reported());
        source.components = Err(0);
        let mut sampler = ScriptedSampler::new(&[]);
        let outcome = fetch_by_place(&source, "Delhi", &mut sampler).await;

        assert_eq!(
            outcome.status.message(),
            "Error: Failed to parse response: expected value at line 1"
        );
        assert_all_cleared(&outcome);
    }

    #[tokio::test]
    async fn test_fetch_by_location() {
        let source = FakeSource::with_components(reported());
        let mut sampler = ScriptedSampler::new(&[2.0, 3.0, 12.0, 4.0]);
        let outcome = fetch_by_location(&source, &mut sampler).await;
        assert_eq!(outcome.status.message(), "Data from: Delhi");
        assert_eq!(outcome.measurements.populated_count(), 13);

        let mut source = FakeSource::with_components(reported());
        source.locate = None;
        let mut sampler = ScriptedSampler::new(&[]);
        let outcome = fetch_by_location(&source, &mut sampler).await;
        assert!(matches!(outcome.status, FetchStatus::LocationUnavailable(_)));
        assert_all_cleared(&outcome);
        assert_eq!(source.component_calls.get(), 0);
    }
}
