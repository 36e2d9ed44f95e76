//! Prediction output: badge plus the ranked plant list.

use super::AqiBadgeView;
use aqi_core::recommend::RecommendationReport;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RecommendationListProps {
    pub report: RecommendationReport,
}

#[component]
pub fn RecommendationList(props: RecommendationListProps) -> Element {
    let report = props.report;

    if let Some(message) = report.message.clone() {
        return rsx! {
            p { style: "color: #C62828; margin: 8px 0;", "{message}" }
        };
    }

    rsx! {
        div {
            if let Some(badge) = report.badge.clone() {
                AqiBadgeView { badge }
            }
            h4 { style: "margin: 8px 0 4px 0;", "Recommended Plants:" }
            ul {
                style: "margin: 0; padding-left: 20px;",
                for item in report.items() {
                    li { key: "{item}", "{item}" }
                }
            }
        }
    }
}
