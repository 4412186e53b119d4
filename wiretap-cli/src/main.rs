//! ## wiretap-cli
//! **Command-line front end for the traffic logger**
//!
//! - `wiretap dump <file|->` prints a hex dump in the same layout traffic records use
//! - `wiretap replay <scenario.yaml>` runs recorded channel events through a logging pipeline
//!
//! Configuration comes from `config/wiretap.yaml` (or `--config`) and `WIRETAP_*` variables.

use clap::Parser;
use wiretap_config::WiretapConfig;
use wiretap_telemetry::logging::EventLogger;

mod commands;
mod error;
mod scenario;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => WiretapConfig::load_from_path(path)?,
        None => WiretapConfig::load()?,
    };
    EventLogger::init(&config.telemetry);

    match cli.command {
        Commands::Dump(args) => commands::run_dump(args).await?,
        Commands::Replay(args) => commands::run_replay(args, &config).await?,
    }
    Ok(())
}
