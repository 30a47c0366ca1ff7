use crate::logbook::FlightSummary;
use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;
use std::collections::BTreeMap;

pub const TOTAL_PERIOD: &str = "TOTAL";

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum Span {
    #[value(name = "y", alias = "year")]
    Year,
    #[value(name = "m", alias = "month")]
    Month,
    #[value(name = "d", alias = "day")]
    Day,
}

impl Span {
    pub fn period_of(&self, date: NaiveDate) -> String {
        match self {
            Span::Year => format!("{:04}", date.year()),
            Span::Month => format!("{:04}-{:02}", date.year(), date.month()),
            Span::Day => format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day()),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Bucket {
    pub period: String,
    pub flights: u32,
    pub duration: Duration,
    pub max_altitude_gain: i32,
}

impl Bucket {
    fn empty(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            flights: 0,
            duration: Duration::zero(),
            max_altitude_gain: 0,
        }
    }

    fn add(&mut self, flights: u32, duration: Duration, max_altitude_gain: i32) {
        self.flights += flights;
        self.duration += duration;
        self.max_altitude_gain = self.max_altitude_gain.max(max_altitude_gain);
    }

    /// Mean flight time, rounded down to whole seconds.
    pub fn average(&self) -> Duration {
        if self.flights == 0 {
            return Duration::zero();
        }

        Duration::seconds(self.duration.num_seconds().div_euclid(self.flights as i64))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Summary {
    pub buckets: Vec<Bucket>,
    pub total: Option<Bucket>,
}

impl Summary {
    pub fn rows(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter().chain(self.total.iter())
    }
}

/// Groups flights into chronologically ordered buckets of the given span.
pub fn aggregate(flights: &[FlightSummary], span: Span, with_total: bool) -> Summary {
    let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();

    for flight in flights {
        let period = span.period_of(flight.date);
        buckets
            .entry(period.clone())
            .or_insert_with(|| Bucket::empty(period))
            .add(1, flight.stats.duration, flight.stats.max_altitude_gain);
    }

    let buckets: Vec<Bucket> = buckets.into_values().collect();

    let total = with_total.then(|| {
        buckets.iter().fold(Bucket::empty(TOTAL_PERIOD), |mut total, bucket| {
            total.add(bucket.flights, bucket.duration, bucket.max_altitude_gain);
            total
        })
    });

    Summary { buckets, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::FlightStats;

    fn flight(name: &str, ymd: (i32, u32, u32), seconds: i64, gain: i32) -> FlightSummary {
        FlightSummary {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
            stats: FlightStats {
                duration: Duration::seconds(seconds),
                max_altitude_gain: gain,
            },
        }
    }

    fn logbook() -> Vec<FlightSummary> {
        vec![
            flight("a.igc", (2020, 8, 19), 3600, 400),
            flight("b.igc", (2020, 8, 19), 1801, 950),
            flight("c.igc", (2020, 9, 2), 600, 120),
            flight("d.igc", (2019, 12, 31), 7200, 1500),
        ]
    }

    #[test]
    fn period_keys_follow_span() {
        let date = NaiveDate::from_ymd_opt(2020, 8, 9).unwrap();
        assert_eq!(Span::Year.period_of(date), "2020");
        assert_eq!(Span::Month.period_of(date), "2020-08");
        assert_eq!(Span::Day.period_of(date), "2020-08-09");
    }

    #[test]
    fn yearly_buckets_are_sorted_and_totalled() {
        let summary = aggregate(&logbook(), Span::Year, true);

        let periods: Vec<&str> = summary.rows().map(|b| b.period.as_str()).collect();
        assert_eq!(periods, vec!["2019", "2020", TOTAL_PERIOD]);

        let year_2020 = &summary.buckets[1];
        assert_eq!(year_2020.flights, 3);
        assert_eq!(year_2020.duration.num_seconds(), 6001);
        assert_eq!(year_2020.average().num_seconds(), 2000);
        assert_eq!(year_2020.max_altitude_gain, 950);

        let total = summary.total.unwrap();
        assert_eq!(total.flights, 4);
        assert_eq!(total.duration.num_seconds(), 13201);
        assert_eq!(total.average().num_seconds(), 3300);
        assert_eq!(total.max_altitude_gain, 1500);
    }

    #[test]
    fn daily_buckets_split_same_month() {
        let summary = aggregate(&logbook(), Span::Day, false);

        assert!(summary.total.is_none());
        let periods: Vec<&str> = summary.buckets.iter().map(|b| b.period.as_str()).collect();
        assert_eq!(periods, vec!["2019-12-31", "2020-08-19", "2020-09-02"]);
        assert_eq!(summary.buckets[1].flights, 2);
        assert_eq!(summary.buckets[1].average().num_seconds(), 2700);
    }

    #[test]
    fn average_rounds_down_even_when_negative() {
        let flights = vec![
            flight("midnight.igc", (2021, 1, 1), -7, 0),
            flight("short.igc", (2021, 1, 1), 2, 0),
        ];
        let summary = aggregate(&flights, Span::Month, false);
        assert_eq!(summary.buckets[0].average().num_seconds(), -3);
    }

    #[test]
    fn empty_logbook_has_zero_total() {
        let summary = aggregate(&[], Span::Year, true);
        assert!(summary.buckets.is_empty());
        let total = summary.total.unwrap();
        assert_eq!(total.flights, 0);
        assert_eq!(total.average(), Duration::zero());
    }
}
