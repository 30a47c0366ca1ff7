use crate::commands::{Cli, Commands};
use crate::logbook::{inspect_flight, run_stats};
use anyhow::Result;
use clap::Parser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::debug;

mod commands;
mod error;
mod igc;
mod logbook;
mod stats;

pub mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let mp = MultiProgress::new();

    LogWrapper::new(mp.clone(), logger).try_init()?;
    log::set_max_level(level);

    debug!(
        "{} {} ({})",
        built_info::PKG_NAME,
        built_info::PKG_VERSION,
        built_info::TARGET
    );

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats(cmd) => run_stats(mp.clone(), cmd).await?,
        Commands::Inspect(cmd) => inspect_flight(cmd).await?,
    }

    Ok(())
}
