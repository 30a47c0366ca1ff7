use clap::Parser;
use std::path::PathBuf;

/// Prints the track and flight statistics of a single IGC file
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct InspectCommand {
    /// Input IGC file path
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}
