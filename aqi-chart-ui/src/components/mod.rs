//! Reusable Dioxus RSX components for the AQI dashboard.

mod aqi_badge;
mod chart_container;
mod error_display;
mod loading_spinner;
mod parameters_card;
mod recommendation_list;
mod status_banner;

pub use aqi_badge::AqiBadgeView;
pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use parameters_card::ParametersCard;
pub use recommendation_list::RecommendationList;
pub use status_banner::{SourceNote, StatusBanner};
