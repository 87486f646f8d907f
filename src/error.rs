//! Error types for the liftlog library.

use thiserror::Error;

/// Errors that can occur when loading or updating a workout log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("cannot read file: {0}")]
    CannotRead(String),

    #[error("cannot write file: {0}")]
    CannotWrite(String),

    #[error("invalid log format: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("negative weight in entry {entry}, set {set}: {value}")]
    NegativeWeight { entry: usize, set: usize, value: f64 },

    #[error("{exercise} on {date} has more than one tracked set")]
    MultipleTrackedSets { exercise: String, date: chrono::NaiveDate },

    #[error("invalid set '{0}' (expected WEIGHTxREPS, optional * to track)")]
    InvalidSet(String),
}

/// Errors in user-supplied settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown unit: {0} (expected lbs or kg)")]
    UnknownUnit(String),
}
