use serde::{Deserialize, Serialize};

/// One band of a pollutant breakpoint table.
///
/// A concentration in `[low, high]` maps linearly onto `[aqi_low, aqi_high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub low: f64,
    pub high: f64,
    pub aqi_low: f64,
    pub aqi_high: f64,
}

impl Breakpoint {
    const fn new(low: f64, high: f64, aqi_low: f64, aqi_high: f64) -> Self {
        Self {
            low,
            high,
            aqi_low,
            aqi_high,
        }
    }

    /// Whether `concentration` falls inside this band (both ends inclusive).
    pub fn contains(&self, concentration: f64) -> bool {
        self.low <= concentration && concentration <= self.high
    }

    /// Linear interpolation of `concentration` into this band's AQI range.
    pub fn interpolate(&self, concentration: f64) -> f64 {
        (self.aqi_high - self.aqi_low) / (self.high - self.low) * (concentration - self.low)
            + self.aqi_low
    }
}

/// PM2.5 breakpoints (24-hour average, ug/m3) from the India National AQI.
pub const PM25_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 30.0, 0.0, 50.0),        // Good
    Breakpoint::new(31.0, 60.0, 51.0, 100.0),     // Satisfactory
    Breakpoint::new(61.0, 90.0, 101.0, 200.0),    // Moderate
    Breakpoint::new(91.0, 120.0, 201.0, 300.0),   // Poor
    Breakpoint::new(121.0, 250.0, 301.0, 400.0),  // Very Poor
    Breakpoint::new(251.0, 500.0, 401.0, 500.0),  // Severe
];

/// PM10 breakpoints (24-hour average, ug/m3) from the India National AQI.
pub const PM10_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 50.0, 0.0, 50.0),
    Breakpoint::new(51.0, 100.0, 51.0, 100.0),
    Breakpoint::new(101.0, 250.0, 101.0, 200.0),
    Breakpoint::new(251.0, 350.0, 201.0, 300.0),
    Breakpoint::new(351.0, 430.0, 301.0, 400.0),
    Breakpoint::new(431.0, 500.0, 401.0, 500.0),
];

/// Calculate the sub-index of a single pollutant concentration.
///
/// # Arguments
///
/// * `concentration` - The pollutant concentration
/// * `table` - An ordered breakpoint table, scanned front to back
///
/// # Returns
///
/// The interpolated sub-index from the first band containing
/// `concentration`, rounded with `f64::round` (ties away from zero).
///
/// A concentration that no band contains returns `0`. That covers negative
/// values, values above the last band, NaN, and the integer gaps between
/// bands (e.g. PM2.5 of 30.5). Callers must not read a `0` as "Good"
/// without checking the input range first.
///
/// # Examples
///
/// ```
/// use aqi_core::{subindex, PM25_BREAKPOINTS};
///
/// assert_eq!(subindex(30.0, &PM25_BREAKPOINTS), 50);
/// assert_eq!(subindex(45.0, &PM25_BREAKPOINTS), 75);
/// assert_eq!(subindex(501.0, &PM25_BREAKPOINTS), 0);
/// ```
pub fn subindex(concentration: f64, table: &[Breakpoint]) -> u16 {
    table
        .iter()
        .find(|bp| bp.contains(concentration))
        .map(|bp| bp.interpolate(concentration).round() as u16)
        .unwrap_or(0)
}

/// Overall AQI from particulate readings: the worse of the two sub-indices.
pub fn aqi(pm25: f64, pm10: f64) -> u16 {
    let pm25_aqi = subindex(pm25, &PM25_BREAKPOINTS);
    let pm10_aqi = subindex(pm10, &PM10_BREAKPOINTS);
    pm25_aqi.max(pm10_aqi)
}
