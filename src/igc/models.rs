use chrono::{NaiveDate, NaiveTime};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RecordKind {
    Date,
    Position,
    Other,
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Date => write!(f, "date"),
            RecordKind::Position => write!(f, "position"),
            RecordKind::Other => write!(f, "other"),
        }
    }
}

/// A decoded line, tagged by its record kind.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Record {
    Date(FlightDate),
    Position(Position),
    Other,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "N" => Some(Orientation::North),
            "S" => Some(Orientation::South),
            "E" => Some(Orientation::East),
            "W" => Some(Orientation::West),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::South => 'S',
            Orientation::East => 'E',
            Orientation::West => 'W',
        }
    }
}

/// Latitude or longitude component as encoded in a B record:
/// whole degrees, whole minutes and thousandths of a minute.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Coordinate {
    pub degrees: u32,
    pub minutes: u32,
    pub minute_thousandths: u32,
    pub orientation: Orientation,
}

impl Coordinate {
    /// Signed decimal degrees, negative for southern latitudes and western longitudes.
    pub fn to_decimal_degrees(&self) -> f64 {
        let minutes = self.minutes as f64 + self.minute_thousandths as f64 / 1000.0;
        let value = self.degrees as f64 + minutes / 60.0;

        match self.orientation {
            Orientation::South | Orientation::West => -value,
            Orientation::North | Orientation::East => value,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FixValidity {
    Valid,
    VoidOrEstimated,
}

impl FixValidity {
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "A" => Some(FixValidity::Valid),
            "V" => Some(FixValidity::VoidOrEstimated),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            FixValidity::Valid => 'A',
            FixValidity::VoidOrEstimated => 'V',
        }
    }
}

/// Local clock time of a fix. Fields are kept as recorded, so an
/// out-of-range value (e.g. minute 61) survives decoding.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FixTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl FixTime {
    pub fn seconds_since_midnight(&self) -> i64 {
        (self.hour as i64 * 60 + self.minute as i64) * 60 + self.second as i64
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
    }
}

impl Display for FixTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Position {
    pub time: FixTime,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub fix_validity: FixValidity,
    pub pressure_altitude: i32,
    pub gps_altitude: i32,
}

/// Writes the canonical B record for this position.
///
/// Format: B HHMMSS DDMMmmmN DDDMMmmmE A PPPPP GGGGG
/// Negative altitudes use the `-NNNN` form.
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "B{:02}{:02}{:02}{:02}{:02}{:03}{}{:03}{:02}{:03}{}{}",
            self.time.hour,
            self.time.minute,
            self.time.second,
            self.latitude.degrees,
            self.latitude.minutes,
            self.latitude.minute_thousandths,
            self.latitude.orientation.letter(),
            self.longitude.degrees,
            self.longitude.minutes,
            self.longitude.minute_thousandths,
            self.longitude.orientation.letter(),
            self.fix_validity.letter(),
        )?;
        write_altitude(f, self.pressure_altitude)?;
        write_altitude(f, self.gps_altitude)
    }
}

fn write_altitude(f: &mut Formatter<'_>, altitude: i32) -> std::fmt::Result {
    if altitude < 0 {
        write!(f, "-{:04}", altitude.unsigned_abs())
    } else {
        write!(f, "{altitude:05}")
    }
}

/// Flight date from the `HFDTE` header. Not checked against the calendar.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct FlightDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl FlightDate {
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl Display for FlightDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Track {
    pub name: String,
    pub date: FlightDate,
    pub points: Vec<Position>,
}
