use crate::logbook::aggregate::Span;
use clap::Parser;
use std::path::PathBuf;

/// Aggregates flight time and altitude gain of all IGC files in a directory
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(
    long_about = "Aggregates flight time and altitude gain of all IGC files in a directory\n\nNote: IGC files must use CRLF line endings, flights crossing local midnight report a negative duration"
)]
pub struct StatsCommand {
    /// Directory containing the .igc files
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Bucket flights by year, month or day
    #[arg(long, short = 's', value_enum, value_name = "SPAN", default_value_t = Span::Year)]
    pub span: Span,

    #[arg(
        long,
        short = 'r',
        help = "prints durations as whole seconds instead of hh:mm",
        default_value_t = false
    )]
    pub raw: bool,

    #[arg(
        long = "no-total",
        help = "omits the TOTAL row",
        default_value_t = false
    )]
    pub no_total: bool,

    #[arg(long, help = "writes the summary as CSV", default_value_t = false)]
    pub csv: bool,

    #[arg(
        long,
        short = 'R',
        help = "recursively scans all subdirectories of DIR for IGC files",
        default_value_t = false
    )]
    pub recursive: bool,

    #[arg(
        long,
        help = "aborts on the first file that cannot be parsed instead of skipping it",
        default_value_t = false
    )]
    pub strict: bool,

    /// Number of files parsed concurrently, defaults to the available parallelism
    #[arg(long, short = 'j', value_name = "JOBS")]
    pub jobs: Option<usize>,
}
