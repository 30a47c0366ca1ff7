use crate::igc::models::RecordKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IgcError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Unrecognized {kind} record: {line}")]
    MalformedRecord { kind: RecordKind, line: String },

    #[error("No HFDTE date record found in {0}")]
    NoDateRecord(PathBuf),
}

impl IgcError {
    pub fn malformed(kind: RecordKind, line: &str) -> Self {
        IgcError::MalformedRecord {
            kind,
            line: line.to_string(),
        }
    }
}

pub type IgcResult<T> = Result<T, IgcError>;
