//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A container div for a D3.js bar chart. The chart title is drawn by D3,
/// so an empty container renders as blank space.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; background: #ffffff; border-radius: 6px; margin-top: 12px;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
