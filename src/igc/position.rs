use crate::igc::error::{IgcError, IgcResult};
use crate::igc::field;
use crate::igc::models::{Coordinate, FixTime, FixValidity, Orientation, Position, RecordKind};
use const_format::concatcp;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

const DD: &str = "([0-9]{2})";
const DDD: &str = "([0-9]{3})";
const ALTITUDE: &str = "([0-9]{5}|-[0-9]{4})";

// B HH MM SS DDMMmmm [NS] DDDMMmmm [EW] [AV] PPPPP GGGGG
// Anything after the GPS altitude is an I-record extension and is ignored.
const B_RECORD_PATTERN: &str = concatcp!(
    "^B",
    DD, DD, DD,
    DD, DD, DDD, "([NS])",
    DDD, DD, DDD, "([EW])",
    "([AV])",
    ALTITUDE,
    ALTITUDE,
);

lazy_static! {
    static ref B_RECORD: Regex = Regex::new(B_RECORD_PATTERN).expect("Invalid B record regex");
}

pub fn parse_point(line: &str) -> IgcResult<Position> {
    let caps = B_RECORD
        .captures(line)
        .ok_or_else(|| IgcError::malformed(RecordKind::Position, line))?;

    let number = |idx: usize| -> IgcResult<u32> { field(&caps, idx, RecordKind::Position, line) };

    let time = FixTime {
        hour: number(1)?,
        minute: number(2)?,
        second: number(3)?,
    };

    let latitude = coordinate(&caps, 4, line)?;
    let longitude = coordinate(&caps, 8, line)?;

    let fix_validity = FixValidity::from_letter(&caps[12])
        .ok_or_else(|| IgcError::malformed(RecordKind::Position, line))?;

    Ok(Position {
        time,
        latitude,
        longitude,
        fix_validity,
        pressure_altitude: field(&caps, 13, RecordKind::Position, line)?,
        gps_altitude: field(&caps, 14, RecordKind::Position, line)?,
    })
}

/// Reads degrees, minutes, thousandths and orientation starting at capture `first`.
fn coordinate(caps: &Captures, first: usize, line: &str) -> IgcResult<Coordinate> {
    let orientation = Orientation::from_letter(&caps[first + 3])
        .ok_or_else(|| IgcError::malformed(RecordKind::Position, line))?;

    Ok(Coordinate {
        degrees: field(caps, first, RecordKind::Position, line)?,
        minutes: field(caps, first + 1, RecordKind::Position, line)?,
        minute_thousandths: field(caps, first + 2, RecordKind::Position, line)?,
        orientation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "B1101355206343N00006343WA0018900215";

    #[test]
    fn parses_sample_fix() {
        let point = parse_point(SAMPLE).unwrap();

        assert_eq!(
            point.time,
            FixTime {
                hour: 11,
                minute: 1,
                second: 35
            }
        );
        assert_eq!(
            point.latitude,
            Coordinate {
                degrees: 52,
                minutes: 6,
                minute_thousandths: 343,
                orientation: Orientation::North,
            }
        );
        assert_eq!(
            point.longitude,
            Coordinate {
                degrees: 0,
                minutes: 6,
                minute_thousandths: 343,
                orientation: Orientation::West,
            }
        );
        assert_eq!(point.fix_validity, FixValidity::Valid);
        assert_eq!(point.pressure_altitude, 189);
        assert_eq!(point.gps_altitude, 215);
    }

    #[test]
    fn canonical_encoding_reproduces_the_line() {
        for line in [
            SAMPLE,
            "B0000003300000S17959999EV-009900000",
            "B2359594559999N12345678EA12345-0042",
        ] {
            let point = parse_point(line).unwrap();
            assert_eq!(point.to_string(), line);
            assert_eq!(parse_point(&point.to_string()).unwrap(), point);
        }
    }

    #[test]
    fn accepts_negative_altitudes() {
        let point = parse_point("B1101355206343N00006343WV-0012-0003").unwrap();
        assert_eq!(point.fix_validity, FixValidity::VoidOrEstimated);
        assert_eq!(point.pressure_altitude, -12);
        assert_eq!(point.gps_altitude, -3);
    }

    #[test]
    fn accepts_out_of_range_minutes() {
        let point = parse_point("B1161995275999N00099999EA0000000000").unwrap();
        assert_eq!(point.time.minute, 61);
        assert_eq!(point.time.second, 99);
        assert_eq!(point.latitude.minutes, 75);
        assert_eq!(point.longitude.minutes, 99);
    }

    #[test]
    fn ignores_extension_data_after_gps_altitude() {
        let point = parse_point("B1101355206343N00006343WA0018900215012345").unwrap();
        assert_eq!(point.gps_altitude, 215);
    }

    #[test]
    fn rejects_malformed_lines() {
        for line in [
            "B",
            "B1101355206343N00006343WA00189",
            "B1101355206343X00006343WA0018900215",
            "B1101355206343N00006343NA0018900215",
            "B1101355206343N00006343WX0018900215",
            "B11013552O6343N00006343WA0018900215",
            "B1101355206343N00006343WA--18900215",
            " B1101355206343N00006343WA0018900215",
        ] {
            match parse_point(line) {
                Err(IgcError::MalformedRecord { kind, line: raw }) => {
                    assert_eq!(kind, RecordKind::Position);
                    assert_eq!(raw, line);
                }
                other => panic!("expected malformed record for {line}, got {other:?}"),
            }
        }
    }
}
