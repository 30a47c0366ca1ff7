use crate::igc::models::{Position, Track};
use crate::stats::error::{StatsError, StatsResult};
use chrono::Duration;

pub mod error;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FlightStats {
    pub duration: Duration,
    pub max_altitude_gain: i32,
}

/// Time between the first and the last fix.
///
/// Fix times carry no date, so a flight crossing local midnight
/// yields a negative span.
pub fn calculate_duration(points: &[Position]) -> StatsResult<Duration> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(StatsError::EmptyTrack);
    };

    Ok(Duration::seconds(
        last.time.seconds_since_midnight() - first.time.seconds_since_midnight(),
    ))
}

/// Largest GPS altitude climb from a low point, in meters.
///
/// Single forward pass: while ascending (or level) the gain above the
/// running minimum is tracked, descending only lowers the minimum.
pub fn calculate_max_altitude_gain(points: &[Position]) -> StatsResult<i32> {
    let (first, rest) = points.split_first().ok_or(StatsError::EmptyTrack)?;

    let mut min = first.gps_altitude;
    let mut prev = first.gps_altitude;
    let mut gain = 0;

    for point in rest {
        let alt = point.gps_altitude;

        if alt >= prev {
            gain = gain.max(alt - min);
        } else {
            min = min.min(alt);
        }

        prev = alt;
    }

    Ok(gain)
}

pub fn calculate_all_stats(track: &Track) -> StatsResult<FlightStats> {
    Ok(FlightStats {
        duration: calculate_duration(&track.points)?,
        max_altitude_gain: calculate_max_altitude_gain(&track.points)?,
    })
}
