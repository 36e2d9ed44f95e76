//! Local AQI computation, no network involved.

use aqi_core::{aqi, classify, subindex, PM10_BREAKPOINTS, PM25_BREAKPOINTS};

/// Render the sub-indices, overall AQI and category for a reading.
pub fn format_index(pm25: f64, pm10: f64) -> String {
    let pm25_index = subindex(pm25, &PM25_BREAKPOINTS);
    let pm10_index = subindex(pm10, &PM10_BREAKPOINTS);
    let overall = aqi(pm25, pm10);
    let category = classify(f64::from(overall));
    format!(
        "PM2.5 {pm25} -> {pm25_index}\nPM10 {pm10} -> {pm10_index}\nAQI {overall} ({category}, {color})",
        color = category.color()
    )
}

pub fn run_index(pm25: f64, pm10: f64) {
    println!("{}", format_index(pm25, pm10));
}
