use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum StatsError {
    #[error("Track contains no position records")]
    EmptyTrack,
}

pub type StatsResult<T> = Result<T, StatsError>;
