//! liftlog - Personal strength training log
//!
//! Estimated one-rep max from logged sets, and the trends built on it.

pub mod error;
pub mod estimator;
pub mod exercises;
pub mod stats;
pub mod time_ago;
pub mod units;
pub mod workout;

pub use estimator::{Set, estimate_max, reps_from_estimated_max};
pub use workout::WorkoutLog;
