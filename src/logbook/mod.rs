use crate::commands::inspect::InspectCommand;
use crate::commands::stats::StatsCommand;
use crate::error::{AeriaError, AeriaResult};
use crate::igc::models::Track;
use crate::igc::parse_file;
use crate::logbook::aggregate::aggregate;
use crate::logbook::output::{format_duration, write_csv, write_inspection, write_table};
use crate::logbook::scan::find_igc_files;
use crate::stats::{FlightStats, calculate_all_stats};
use chrono::{Duration, NaiveDate};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread::available_parallelism;
use tokio::task::JoinSet;

pub mod aggregate;
pub mod output;
pub mod scan;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FlightSummary {
    pub name: String,
    pub date: NaiveDate,
    pub stats: FlightStats,
}

pub async fn summarize_flight(path: &Path) -> AeriaResult<FlightSummary> {
    let track = parse_file(path).await?;
    let stats = calculate_all_stats(&track)?;

    let date = track
        .date
        .to_naive_date()
        .ok_or_else(|| AeriaError::InvalidFlightDate {
            file: track.name.clone(),
            date: track.date,
        })?;

    if stats.duration < Duration::zero() {
        warn!(
            "{} ends before it starts ({}), the flight probably crosses midnight",
            track.name,
            format_duration(stats.duration, false)
        );
    }

    debug!(
        "{}: {} fixes, duration {}s, max altitude gain {}m",
        track.name,
        track.points.len(),
        stats.duration.num_seconds(),
        stats.max_altitude_gain
    );

    Ok(FlightSummary {
        name: track.name,
        date,
        stats,
    })
}

/// Parses every file concurrently, at most `jobs` at a time. Failing files
/// are skipped with a warning unless `strict`, in which case the first
/// failure is returned and the tasks still in flight are aborted.
/// The result is ordered by date, then by file name.
pub async fn summarize_flights(
    files: Vec<PathBuf>,
    jobs: usize,
    strict: bool,
    pb: &ProgressBar,
) -> AeriaResult<Vec<FlightSummary>> {
    let mut pending = files.into_iter();
    let mut tasks = JoinSet::new();

    for path in pending.by_ref().take(jobs.max(1)) {
        spawn_summary(&mut tasks, path);
    }

    let mut flights = Vec::new();

    while let Some(joined) = tasks.join_next().await {
        let (path, result) = joined?;
        pb.inc(1);

        if let Some(next) = pending.next() {
            spawn_summary(&mut tasks, next);
        }

        match result {
            Ok(flight) => flights.push(flight),
            Err(err) if strict => {
                tasks.abort_all();
                return Err(AeriaError::FlightFailed {
                    path,
                    source: Box::new(err),
                });
            }
            Err(err) => warn!("Skipping {path:?}: {err}"),
        }
    }

    flights.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));

    Ok(flights)
}

fn spawn_summary(
    tasks: &mut JoinSet<(PathBuf, AeriaResult<FlightSummary>)>,
    path: PathBuf,
) {
    tasks.spawn(async move {
        let result = summarize_flight(&path).await;
        (path, result)
    });
}

pub async fn run_stats(mp: MultiProgress, cmd: StatsCommand) -> AeriaResult<()> {
    let files = find_igc_files(&cmd.dir, cmd.recursive).await?;
    info!("Found {} IGC files in {:?}", files.len(), cmd.dir);

    let jobs = cmd
        .jobs
        .unwrap_or_else(|| available_parallelism().map(|n| n.get()).unwrap_or(1));
    debug!("Parsing with {jobs} concurrent jobs");

    let pb = mp.add(ProgressBar::new(files.len() as u64));
    pb.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} files")?
            .progress_chars("#>-"),
    );

    let total_files = files.len();
    let flights = summarize_flights(files, jobs, cmd.strict, &pb).await?;
    pb.finish_and_clear();

    if flights.len() < total_files {
        warn!(
            "{} of {} files were skipped",
            total_files - flights.len(),
            total_files
        );
    }

    let summary = aggregate(&flights, cmd.span, !cmd.no_total);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cmd.csv {
        write_csv(&summary, cmd.raw, out)?;
    } else {
        write_table(&summary, cmd.raw, &mut out)?;
    }

    Ok(())
}

pub async fn inspect_flight(cmd: InspectCommand) -> AeriaResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for warning in inspect_track(&cmd.input, &mut out).await? {
        warn!("{warning}");
    }

    Ok(())
}

/// Writes the inspection report of one file to `out` and returns the
/// data quality warnings found along the way.
pub async fn inspect_track(path: &Path, out: &mut impl Write) -> AeriaResult<Vec<String>> {
    let track = parse_file(path).await?;
    let stats = calculate_all_stats(&track)?;

    write_inspection(&track, &stats, out)?;

    Ok(inspection_warnings(&track, &stats))
}

fn inspection_warnings(track: &Track, stats: &FlightStats) -> Vec<String> {
    let mut warnings = Vec::new();

    if track.date.to_naive_date().is_none() {
        warnings.push(format!("{} is not a valid calendar date", track.date));
    }

    let invalid_times = track
        .points
        .iter()
        .filter(|point| point.time.to_naive_time().is_none())
        .count();
    if invalid_times > 0 {
        warnings.push(format!(
            "{invalid_times} fixes carry an out-of-range clock time"
        ));
    }

    if stats.duration < Duration::zero() {
        warnings.push(format!(
            "{} ends before it starts, the flight probably crosses midnight",
            track.name
        ));
    }

    warnings
}
