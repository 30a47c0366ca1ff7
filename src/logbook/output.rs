use crate::error::AeriaResult;
use crate::igc::models::Track;
use crate::logbook::aggregate::{Bucket, Summary};
use crate::stats::FlightStats;
use crate::stats::error::StatsError;
use chrono::Duration;
use serde::Serialize;
use std::io::Write;

const HEADERS: [&str; 5] = ["PERIOD", "FLIGHTS", "DURATION", "AVERAGE", "MAX GAIN"];

#[derive(Debug, Serialize)]
struct Row {
    #[serde(rename = "PERIOD")]
    period: String,
    #[serde(rename = "FLIGHTS")]
    flights: u32,
    #[serde(rename = "DURATION")]
    duration: String,
    #[serde(rename = "AVERAGE")]
    average: String,
    #[serde(rename = "MAX GAIN")]
    max_altitude_gain: i32,
}

impl Row {
    fn from_bucket(bucket: &Bucket, raw: bool) -> Self {
        Self {
            period: bucket.period.clone(),
            flights: bucket.flights,
            duration: format_duration(bucket.duration, raw),
            average: format_duration(bucket.average(), raw),
            max_altitude_gain: bucket.max_altitude_gain,
        }
    }

    fn cells(&self) -> [String; 5] {
        [
            self.period.clone(),
            self.flights.to_string(),
            self.duration.clone(),
            self.average.clone(),
            self.max_altitude_gain.to_string(),
        ]
    }
}

/// `hh:mm` with hours not wrapped at a day, or whole seconds when `raw`.
pub fn format_duration(duration: Duration, raw: bool) -> String {
    let seconds = duration.num_seconds();

    if raw {
        return seconds.to_string();
    }

    let sign = if seconds < 0 { "-" } else { "" };
    let seconds = seconds.unsigned_abs();

    format!("{sign}{:02}:{:02}", seconds / 3600, seconds % 3600 / 60)
}

pub fn write_table(summary: &Summary, raw: bool, out: &mut impl Write) -> AeriaResult<()> {
    let rows: Vec<[String; 5]> = summary
        .rows()
        .map(|bucket| Row::from_bucket(bucket, raw).cells())
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    writeln!(
        out,
        "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}  {:>w4$}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        HEADERS[3],
        HEADERS[4],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
        w4 = widths[4],
    )?;

    for row in &rows {
        writeln!(
            out,
            "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}  {:>w4$}",
            row[0],
            row[1],
            row[2],
            row[3],
            row[4],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
            w4 = widths[4],
        )?;
    }

    Ok(())
}

pub fn write_csv(summary: &Summary, raw: bool, out: impl Write) -> AeriaResult<()> {
    let mut writer = csv::Writer::from_writer(out);

    for bucket in summary.rows() {
        writer.serialize(Row::from_bucket(bucket, raw))?;
    }

    writer.flush()?;

    Ok(())
}

pub fn write_inspection(
    track: &Track,
    stats: &FlightStats,
    out: &mut impl Write,
) -> AeriaResult<()> {
    let (Some(first), Some(last)) = (track.points.first(), track.points.last()) else {
        return Err(StatsError::EmptyTrack.into());
    };

    writeln!(out, "File:              {}", track.name)?;
    writeln!(out, "Date:              {}", track.date)?;
    writeln!(out, "Fixes:             {}", track.points.len())?;
    writeln!(
        out,
        "Start:             {} {:.5} {:.5}",
        first.time,
        first.latitude.to_decimal_degrees(),
        first.longitude.to_decimal_degrees()
    )?;
    writeln!(
        out,
        "End:               {} {:.5} {:.5}",
        last.time,
        last.latitude.to_decimal_degrees(),
        last.longitude.to_decimal_degrees()
    )?;
    writeln!(
        out,
        "Duration:          {} ({}s)",
        format_duration(stats.duration, false),
        stats.duration.num_seconds()
    )?;
    writeln!(out, "Max altitude gain: {}m", stats.max_altitude_gain)?;

    Ok(())
}
