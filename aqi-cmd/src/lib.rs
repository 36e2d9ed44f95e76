//! Command implementations for the AQI CLI.
//!
//! Provides subcommands for computing India AQI locally, fetching live
//! measurements, and requesting plant recommendations.

use clap::Subcommand;

pub mod index;
pub mod query;
pub mod recommend;

#[derive(Subcommand)]
pub enum Command {
    /// Compute the AQI from PM2.5 and PM10 concentrations
    Index {
        /// PM2.5 concentration (ug/m3)
        #[arg(long)]
        pm25: f64,

        /// PM10 concentration (ug/m3)
        #[arg(long)]
        pm10: f64,
    },

    /// Fetch current measurements for a place
    Fetch {
        /// Place name to geocode, e.g. "Delhi"
        #[arg(short = 'p', long)]
        place: String,
    },

    /// Fetch current measurements for the location of this machine's IP
    Locate,

    /// Request plant recommendations for fetched or stored measurements
    Recommend {
        /// Fetch measurements for this place first
        #[arg(short = 'p', long, conflicts_with = "input", required_unless_present = "input")]
        place: Option<String>,

        /// Read the measurement vector from a JSON file
        #[arg(short = 'i', long)]
        input: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Index { pm25, pm10 } => {
            index::run_index(pm25, pm10);
            Ok(())
        }
        Command::Fetch { place } => query::run_fetch(&place).await,
        Command::Locate => query::run_locate().await,
        Command::Recommend { place, input } => {
            recommend::run_recommend(place.as_deref(), input.as_deref()).await
        }
    }
}
