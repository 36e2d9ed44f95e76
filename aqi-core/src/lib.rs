//! Core types for the AQI plant recommendation dashboard.
//!
//! - `breakpoint`: India AQI breakpoint tables, sub-index and aggregate AQI
//! - `category`: AQI severity bands and their display colors
//! - `measurement`: the thirteen-field measurement vector sent to the model
//! - `fetch` / `recommend`: orchestration around the two remote services
//! - `openweather` / `predictor`: reqwest clients (only with the `api` feature)

pub mod breakpoint;
pub mod category;
pub mod chart;
pub mod config;
pub mod error;
pub mod fetch;
pub mod measurement;
pub mod recommend;
pub mod sampler;

#[cfg(feature = "api")]
pub mod openweather;
#[cfg(feature = "api")]
pub mod predictor;

pub use breakpoint::{aqi, subindex, Breakpoint, PM10_BREAKPOINTS, PM25_BREAKPOINTS};
pub use category::{classify, Category};
pub use error::{AqiError, Result};
pub use measurement::{Field, MeasurementVector};
