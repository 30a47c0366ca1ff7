use crate::igc::date::parse_date;
use crate::igc::error::{IgcError, IgcResult};
use crate::igc::models::{FlightDate, Record, RecordKind, Track};
use crate::igc::position::parse_point;
use log::debug;
use regex::Captures;
use std::path::Path;
use std::str::FromStr;

pub mod date;
pub mod error;
pub mod models;
pub mod position;

/// IGC records are separated by CRLF only.
const LINE_SEPARATOR: &str = "\r\n";

pub fn classify(line: &str) -> RecordKind {
    if line.starts_with("HFDTE") {
        RecordKind::Date
    } else if line.starts_with('B') {
        RecordKind::Position
    } else {
        RecordKind::Other
    }
}

pub fn parse_record(line: &str) -> IgcResult<Record> {
    match classify(line) {
        RecordKind::Date => Ok(Record::Date(parse_date(line)?)),
        RecordKind::Position => Ok(Record::Position(parse_point(line)?)),
        RecordKind::Other => Ok(Record::Other),
    }
}

pub async fn parse_file(path: impl AsRef<Path>) -> IgcResult<Track> {
    let path = path.as_ref();

    debug!("Parsing IGC file: {path:?}");
    let data = tokio::fs::read(path).await?;
    let content = String::from_utf8_lossy(&data);

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    parse_content(name, &content)?.ok_or_else(|| IgcError::NoDateRecord(path.to_path_buf()))
}

/// Builds a track from a whole file's text. Returns `None` when the
/// content holds no date record.
pub fn parse_content(name: impl Into<String>, content: &str) -> IgcResult<Option<Track>> {
    let mut date: Option<FlightDate> = None;
    let mut points = Vec::new();

    for line in content.split(LINE_SEPARATOR) {
        match parse_record(line)? {
            Record::Date(parsed) => date = Some(parsed),
            Record::Position(point) => points.push(point),
            Record::Other => {}
        }
    }

    let name = name.into();
    debug!("Decoded {} fixes from {name}", points.len());

    Ok(date.map(|date| Track { name, date, points }))
}

/// Parses capture group `idx` as a base-10 number.
pub(crate) fn field<T: FromStr>(
    caps: &Captures,
    idx: usize,
    kind: RecordKind,
    line: &str,
) -> IgcResult<T> {
    caps.get(idx)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| IgcError::malformed(kind, line))
}
