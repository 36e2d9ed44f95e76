//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use aqi_core::fetch::FetchOutcome;
use aqi_core::measurement::{Field, MeasurementVector};
use aqi_core::recommend::RecommendationReport;
use dioxus::prelude::*;

/// Shared dashboard state.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Place name typed by the user
    pub place: Signal<String>,
    /// Raw text of the thirteen measurement inputs, in `Field::ALL` order
    pub inputs: Signal<Vec<String>>,
    /// A fetch or prediction request is in flight
    pub busy: Signal<bool>,
    /// Status line from the last fetch ("Data from: ...", "City '...' not found.")
    pub status: Signal<Option<String>>,
    /// Attribution under the charts, only after a successful fetch
    pub source_note: Signal<Option<String>>,
    /// Last recommendation report
    pub report: Signal<Option<RecommendationReport>>,
    /// Transport failure talking to the dashboard server
    pub error_msg: Signal<Option<String>>,
    /// Whether the "use my location" flow is enabled
    pub auto_locate: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            place: Signal::new(String::new()),
            inputs: Signal::new(blank_inputs()),
            busy: Signal::new(false),
            status: Signal::new(None),
            source_note: Signal::new(None),
            report: Signal::new(None),
            error_msg: Signal::new(None),
            auto_locate: Signal::new(false),
        }
    }

    /// Replace all thirteen inputs and the status line with a fetch result.
    /// Failed fetches leave every input blank.
    pub fn apply_outcome(&mut self, outcome: &FetchOutcome) {
        self.inputs.set(outcome.measurements.to_inputs());
        self.status.set(Some(outcome.status.message()));
        self.source_note
            .set(outcome.status.source_note().map(str::to_string));
        self.error_msg.set(None);
    }

    /// Blank every input, e.g. after the server could not be reached.
    pub fn clear_inputs(&mut self) {
        self.inputs.set(blank_inputs());
        self.source_note.set(None);
    }

    /// Parse the current inputs into a measurement vector.
    pub fn measurements(&self) -> MeasurementVector {
        MeasurementVector::from_inputs(self.inputs.read().as_slice())
    }

    /// Update the raw text of one input.
    pub fn set_input(&mut self, field: Field, value: String) {
        let mut inputs = self.inputs.write();
        if let Some(slot) = inputs.get_mut(field.index()) {
            *slot = value;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn blank_inputs() -> Vec<String> {
    vec![String::new(); Field::ALL.len()]
}
