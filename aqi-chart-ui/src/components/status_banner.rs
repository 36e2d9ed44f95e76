//! Location/status line shown under the page title.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the last fetch status, e.g. "Data from: Lucknow" or
/// "City 'Atlantis' not found.".
#[component]
pub fn StatusBanner() -> Element {
    let state = use_context::<AppState>();
    let text = state
        .status
        .read()
        .clone()
        .unwrap_or_else(|| "Enter a city or fill in the readings below.".to_string());

    rsx! {
        p {
            style: "margin: 0 0 12px 0; color: #455A64; font-size: 14px;",
            "{text}"
        }
    }
}

/// Attribution line, only present after a successful fetch.
#[component]
pub fn SourceNote() -> Element {
    let state = use_context::<AppState>();
    let note = state.source_note.read().clone();

    rsx! {
        if let Some(note) = note {
            p {
                style: "font-size: 11px; color: #888; text-align: center; margin-top: 8px;",
                "{note}"
            }
        }
    }
}
