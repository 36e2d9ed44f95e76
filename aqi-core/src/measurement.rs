//! The measurement vector: one location's pollutant readings plus AQI.
//!
//! Field names match the JSON keys the prediction model was trained with,
//! so the struct serializes straight into the request body.

use serde::{Deserialize, Serialize};

/// The thirteen fields of a measurement vector, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Pm25,
    Pm10,
    No,
    No2,
    Nox,
    Nh3,
    Co,
    So2,
    O3,
    Benzene,
    Toluene,
    Xylene,
    Aqi,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Pm25,
        Field::Pm10,
        Field::No,
        Field::No2,
        Field::Nox,
        Field::Nh3,
        Field::Co,
        Field::So2,
        Field::O3,
        Field::Benzene,
        Field::Toluene,
        Field::Xylene,
        Field::Aqi,
    ];

    /// Position in `Field::ALL`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// JSON key used by the prediction endpoint.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Pm25 => "PM2_5",
            Field::Pm10 => "PM10",
            Field::No => "NO",
            Field::No2 => "NO2",
            Field::Nox => "NOx",
            Field::Nh3 => "NH3",
            Field::Co => "CO",
            Field::So2 => "SO2",
            Field::O3 => "O3",
            Field::Benzene => "Benzene",
            Field::Toluene => "Toluene",
            Field::Xylene => "Xylene",
            Field::Aqi => "AQI",
        }
    }

    /// Placeholder text for the dashboard input.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Pm25 => "pm2.5",
            Field::Pm10 => "pm10",
            Field::No => "no",
            Field::No2 => "no2",
            Field::Nox => "nox",
            Field::Nh3 => "nh3",
            Field::Co => "co",
            Field::So2 => "so2",
            Field::O3 => "o3",
            Field::Benzene => "benzene",
            Field::Toluene => "toluene",
            Field::Xylene => "xylene",
            Field::Aqi => "AQI Value",
        }
    }
}

/// Pollutant readings for one location at one time.
///
/// Every field is optional; `None` is the "no value" sentinel and
/// serializes as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementVector {
    #[serde(rename = "PM2_5")]
    pub pm2_5: Option<f64>,
    #[serde(rename = "PM10")]
    pub pm10: Option<f64>,
    #[serde(rename = "NO")]
    pub no: Option<f64>,
    #[serde(rename = "NO2")]
    pub no2: Option<f64>,
    #[serde(rename = "NOx")]
    pub nox: Option<f64>,
    #[serde(rename = "NH3")]
    pub nh3: Option<f64>,
    #[serde(rename = "CO")]
    pub co: Option<f64>,
    #[serde(rename = "SO2")]
    pub so2: Option<f64>,
    #[serde(rename = "O3")]
    pub o3: Option<f64>,
    #[serde(rename = "Benzene")]
    pub benzene: Option<f64>,
    #[serde(rename = "Toluene")]
    pub toluene: Option<f64>,
    #[serde(rename = "Xylene")]
    pub xylene: Option<f64>,
    #[serde(rename = "AQI")]
    pub aqi: Option<f64>,
}

impl MeasurementVector {
    /// A vector with all thirteen fields cleared.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Pm25 => self.pm2_5,
            Field::Pm10 => self.pm10,
            Field::No => self.no,
            Field::No2 => self.no2,
            Field::Nox => self.nox,
            Field::Nh3 => self.nh3,
            Field::Co => self.co,
            Field::So2 => self.so2,
            Field::O3 => self.o3,
            Field::Benzene => self.benzene,
            Field::Toluene => self.toluene,
            Field::Xylene => self.xylene,
            Field::Aqi => self.aqi,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Pm25 => &mut self.pm2_5,
            Field::Pm10 => &mut self.pm10,
            Field::No => &mut self.no,
            Field::No2 => &mut self.no2,
            Field::Nox => &mut self.nox,
            Field::Nh3 => &mut self.nh3,
            Field::Co => &mut self.co,
            Field::So2 => &mut self.so2,
            Field::O3 => &mut self.o3,
            Field::Benzene => &mut self.benzene,
            Field::Toluene => &mut self.toluene,
            Field::Xylene => &mut self.xylene,
            Field::Aqi => &mut self.aqi,
        };
        *slot = value;
    }

    /// All thirteen values in `Field::ALL` order.
    pub fn values(&self) -> [Option<f64>; 13] {
        Field::ALL.map(|field| self.get(field))
    }

    /// Number of fields holding a value.
    pub fn populated_count(&self) -> usize {
        self.values().iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.populated_count() == 0
    }

    /// Build a vector from raw form strings, one per field in `Field::ALL`
    /// order. Blank or unparseable entries become `None`.
    pub fn from_inputs<S: AsRef<str>>(inputs: &[S]) -> Self {
        let mut vector = Self::empty();
        for (field, raw) in Field::ALL.iter().zip(inputs.iter()) {
            vector.set(*field, parse_value(raw.as_ref()));
        }
        vector
    }

    /// Render each field for a form input; `None` becomes an empty string.
    pub fn to_inputs(&self) -> Vec<String> {
        self.values()
            .iter()
            .map(|v| v.map(format_value).unwrap_or_default())
            .collect()
    }
}

/// Parse a user-entered reading. Blank, non-numeric and non-finite input
/// is treated as missing.
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a reading for display: integers print without a decimal point.
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// Round to two decimal places, ties away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
