//! Input card: place lookup, the thirteen readings and the predict button.

use crate::state::AppState;
use aqi_core::measurement::Field;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ParametersCardProps {
    /// Fetch readings for the typed place
    pub on_fetch: EventHandler<()>,
    /// Fetch readings for the caller's location
    pub on_locate: EventHandler<()>,
    /// Show the "use my location" button
    #[props(default = false)]
    pub show_locate: bool,
    /// Request recommendations for the current readings
    pub on_predict: EventHandler<()>,
}

/// All buttons are disabled while a request is in flight.
#[component]
pub fn ParametersCard(props: ParametersCardProps) -> Element {
    let mut state = use_context::<AppState>();
    let busy = *state.busy.read();
    let place = state.place.read().clone();
    let inputs = state.inputs.read().clone();
    let show_locate = props.show_locate;

    rsx! {
        div {
            style: "padding: 16px; border: 1px solid #e0e0e0; border-radius: 8px; background: #fafafa;",
            h3 { style: "margin: 0 0 12px 0; font-size: 16px;", "Air Quality Parameters" }

            div {
                style: "display: flex; gap: 8px; margin-bottom: 12px; flex-wrap: wrap;",
                input {
                    r#type: "text",
                    placeholder: "Enter City",
                    value: "{place}",
                    style: "flex: 1; min-width: 160px; padding: 6px 8px;",
                    oninput: move |evt| state.place.set(evt.value()),
                }
                button {
                    disabled: busy,
                    onclick: move |_| props.on_fetch.call(()),
                    "Fetch by City"
                }
                if show_locate {
                    button {
                        disabled: busy,
                        onclick: move |_| props.on_locate.call(()),
                        "Use My Location"
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(140px, 1fr)); gap: 8px;",
                {Field::ALL.into_iter().map(move |field| {
                    let key = field.key();
                    let value = inputs.get(field.index()).cloned().unwrap_or_default();
                    rsx! {
                        label {
                            key: "{key}",
                            style: "display: flex; flex-direction: column; font-size: 12px; color: #555;",
                            "{key}"
                            input {
                                r#type: "number",
                                step: "any",
                                placeholder: field.placeholder(),
                                value: "{value}",
                                style: "padding: 4px 6px;",
                                oninput: move |evt| state.set_input(field, evt.value()),
                            }
                        }
                    }
                })}
            }

            button {
                style: "margin-top: 12px;",
                disabled: busy,
                onclick: move |_| props.on_predict.call(()),
                "Get Plant Suggestions"
            }
        }
    }
}
