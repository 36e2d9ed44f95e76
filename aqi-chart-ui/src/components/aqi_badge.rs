//! Colored AQI category badge.

use aqi_core::recommend::AqiBadge;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AqiBadgeViewProps {
    pub badge: AqiBadge,
}

/// Renders "AQI: 215 (Poor)" on the category color.
#[component]
pub fn AqiBadgeView(props: AqiBadgeViewProps) -> Element {
    let style = format!(
        "display: inline-block; padding: 6px 14px; border-radius: 16px; color: #ffffff; font-weight: 600; background: {};",
        props.badge.color
    );
    let text = props.badge.text();

    rsx! {
        div {
            style: "margin: 8px 0;",
            span { style: "{style}", "{text}" }
        }
    }
}
