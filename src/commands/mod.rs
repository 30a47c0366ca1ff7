use crate::commands::inspect::InspectCommand;
use crate::commands::stats::StatsCommand;
use clap::{Parser, Subcommand};

pub mod inspect;
pub mod stats;

/// CLI for IGC flight log statistics.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Stats(StatsCommand),
    Inspect(InspectCommand),
}
