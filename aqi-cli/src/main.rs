//! AQI CLI - India AQI lookups and plant recommendations from the terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aqi-cli",
    version,
    about = "India AQI and plant recommendation toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: aqi_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    aqi_cmd::run(cli.command).await
}
