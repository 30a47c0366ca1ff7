use crate::igc::error::IgcError;
use crate::igc::models::FlightDate;
use crate::stats::error::StatsError;
use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AeriaError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    IgcError(#[from] IgcError),

    #[error(transparent)]
    StatsError(#[from] StatsError),

    #[error(transparent)]
    CsvError(#[from] csv::Error),

    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),

    #[error(transparent)]
    TemplateError(#[from] indicatif::style::TemplateError),

    #[error("Could not find any IGC files in the specified path: {0}")]
    NoIgcFilesFound(PathBuf),

    #[error("Flight date {date} in {file} is not a valid calendar date")]
    InvalidFlightDate { file: String, date: FlightDate },

    #[error("Failed to process {path:?}: {source}")]
    FlightFailed {
        path: PathBuf,
        source: Box<AeriaError>,
    },
}

pub type AeriaResult<T> = result::Result<T, AeriaError>;
