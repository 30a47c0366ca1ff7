use crate::igc::error::{IgcError, IgcResult};
use crate::igc::field;
use crate::igc::models::{FlightDate, RecordKind};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // HFDTE DDMMYY
    static ref LEGACY_DATE: Regex =
        Regex::new(r"^HFDTE([0-9]{2})([0-9]{2})([0-9]{2})$").expect("Invalid legacy date regex");

    // HFDTEDATE: DDMMYY , NN...
    static ref EXTENDED_DATE: Regex = Regex::new(r"^HFDTEDATE:([0-9]{2})([0-9]{2})([0-9]{2}),.*$")
        .expect("Invalid extended date regex");
}

/// Two-digit years are always read as 20YY.
const CENTURY: i32 = 2000;

pub fn parse_date(line: &str) -> IgcResult<FlightDate> {
    let caps = LEGACY_DATE
        .captures(line)
        .or_else(|| EXTENDED_DATE.captures(line))
        .ok_or_else(|| IgcError::malformed(RecordKind::Date, line))?;

    let year: i32 = field(&caps, 3, RecordKind::Date, line)?;

    Ok(FlightDate {
        day: field(&caps, 1, RecordKind::Date, line)?,
        month: field(&caps, 2, RecordKind::Date, line)?,
        year: CENTURY + year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> FlightDate {
        FlightDate { year, month, day }
    }

    #[test]
    fn parses_legacy_layout() {
        assert_eq!(parse_date("HFDTE190820").unwrap(), date(19, 8, 2020));
    }

    #[test]
    fn parses_extended_layout() {
        assert_eq!(parse_date("HFDTEDATE:190820,01").unwrap(), date(19, 8, 2020));
        assert_eq!(
            parse_date("HFDTEDATE:010199,02 second flight").unwrap(),
            date(1, 1, 2099)
        );
    }

    #[test]
    fn expands_every_year_into_the_2000s() {
        assert_eq!(parse_date("HFDTE311299").unwrap().year, 2099);
        assert_eq!(parse_date("HFDTE010100").unwrap().year, 2000);
    }

    #[test]
    fn keeps_impossible_calendar_days() {
        assert_eq!(parse_date("HFDTE310421").unwrap(), date(31, 4, 2021));
    }

    #[test]
    fn rejects_extended_layout_without_comma() {
        assert!(matches!(
            parse_date("HFDTEDATE:190820"),
            Err(IgcError::MalformedRecord {
                kind: RecordKind::Date,
                ..
            })
        ));
    }

    #[test]
    fn rejects_malformed_lines_and_keeps_the_raw_line() {
        for line in ["HFDTE1908", "HFDTE1908201", "HFDTE19O820", "HFDTE"] {
            match parse_date(line) {
                Err(IgcError::MalformedRecord { kind, line: raw }) => {
                    assert_eq!(kind, RecordKind::Date);
                    assert_eq!(raw, line);
                }
                other => panic!("expected malformed record for {line}, got {other:?}"),
            }
        }
    }
}
