//! AQI-Based Plant Recommendation Dashboard
//!
//! Looks up current air quality for a city (or the server's own location),
//! fills in the thirteen readings, and asks the prediction service which
//! plants suit that air. Results show as a ranked list plus two D3.js bar
//! charts.
//!
//! Data flow:
//! 1. On mount: load the chart script and ask the server whether the
//!    "use my location" flow is enabled. If so, fetch for that location.
//! 2. "Fetch by City": server geocodes the name and fetches pollution
//!    components; the inputs are replaced (or all cleared on failure).
//! 3. "Get Plant Suggestions": the inputs are parsed into a measurement
//!    vector and sent to the prediction service via the server.
//! 4. Whenever the report changes, both charts are re-rendered.

mod server;

use aqi_chart_ui::components::{
    ChartContainer, ErrorDisplay, LoadingSpinner, ParametersCard, RecommendationList, SourceNote,
    StatusBanner,
};
use aqi_chart_ui::js_bridge;
use aqi_chart_ui::state::AppState;
use aqi_core::chart::BarChart;
use aqi_core::recommend::RecommendationReport;
use dioxus::prelude::*;
use server::{dashboard_options, fetch_location, fetch_place, recommend};

/// DOM ids for the D3 chart container divs.
const TOP_CHART_ID: &str = "top-plants-chart";
const ALL_CHART_ID: &str = "all-plants-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    #[cfg(feature = "server")]
    server::apply_listen_address();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: chart script + startup options, once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
        spawn(async move {
            match dashboard_options().await {
                Ok(options) => {
                    state.auto_locate.set(options.auto_locate);
                    if options.auto_locate {
                        locate(state).await;
                    }
                }
                Err(e) => {
                    log::warn!("Could not load dashboard options: {}", e);
                    state.error_msg.set(Some(format!("Error: {}", e)));
                }
            }
        });
    });

    // ─── Effect 2: re-render both charts whenever the report changes ───
    use_effect(move || {
        let (top, all) = match state.report.read().as_ref() {
            Some(report) => (report.top_chart.clone(), report.all_chart.clone()),
            None => (BarChart::empty(), BarChart::empty()),
        };
        js_bridge::render_bar_chart(TOP_CHART_ID, &top);
        js_bridge::render_bar_chart(ALL_CHART_ID, &all);
    });

    let busy = *state.busy.read();
    let show_locate = *state.auto_locate.read();
    let report = state.report.read().clone();

    rsx! {
        document::Script { src: js_bridge::D3_SCRIPT_URL }
        div {
            style: "min-height: 100vh; padding: 20px; background: #f4f9ef; font-family: system-ui, -apple-system, sans-serif;",
            div {
                style: "max-width: 1100px; margin: 0 auto; padding: 24px; background: #ccf7a6; border-radius: 15px;",
                h2 {
                    style: "text-align: center; margin: 8px 0 16px 0;",
                    "AQI-Based Plant Recommendation Dashboard"
                }
                StatusBanner {}

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }

                div {
                    style: "display: flex; gap: 24px; flex-wrap: wrap; align-items: flex-start;",
                    div {
                        style: "flex: 1 1 300px;",
                        ParametersCard {
                            on_fetch: move |_| {
                                spawn(fetch(state));
                            },
                            on_locate: move |_| {
                                spawn(locate(state));
                            },
                            show_locate,
                            on_predict: move |_| {
                                spawn(predict(state));
                            },
                        }
                    }
                    div {
                        style: "flex: 2 1 500px;",
                        if busy {
                            LoadingSpinner { label: "Waiting for response...".to_string() }
                        }
                        if let Some(report) = report {
                            RecommendationList { report }
                        }
                        ChartContainer { id: TOP_CHART_ID.to_string(), min_height: 400 }
                        ChartContainer { id: ALL_CHART_ID.to_string(), min_height: 600 }
                        SourceNote {}
                    }
                }
            }
        }
    }
}

/// Fetch readings for the typed place. Ignored while another request is
/// in flight.
async fn fetch(mut state: AppState) {
    if *state.busy.peek() {
        return;
    }
    let place = state.place.peek().clone();
    state.busy.set(true);
    match fetch_place(place).await {
        Ok(outcome) => state.apply_outcome(&outcome),
        Err(e) => fail_fetch(&mut state, e),
    }
    state.busy.set(false);
}

/// Fetch readings for the server-resolved location.
async fn locate(mut state: AppState) {
    if *state.busy.peek() {
        return;
    }
    state.busy.set(true);
    match fetch_location().await {
        Ok(outcome) => {
            if let aqi_core::fetch::FetchStatus::Fetched { place } = &outcome.status {
                state.place.set(place.clone());
            }
            state.apply_outcome(&outcome);
        }
        Err(e) => fail_fetch(&mut state, e),
    }
    state.busy.set(false);
}

fn fail_fetch(state: &mut AppState, err: ServerFnError) {
    log::warn!("Fetch request failed: {}", err);
    state.clear_inputs();
    state.status.set(Some(format!("Error: {}", err)));
}

/// Send the current readings to the prediction service.
async fn predict(mut state: AppState) {
    if *state.busy.peek() {
        return;
    }
    let measurements = state.measurements();
    state.busy.set(true);
    let report = match recommend(measurements).await {
        Ok(report) => report,
        Err(e) => {
            log::warn!("Recommendation request failed: {}", e);
            RecommendationReport::failed(format!("Error: {}", e))
        }
    };
    state.report.set(Some(report));
    state.busy.set(false);
}
