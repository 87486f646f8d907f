//! Workout log - entries loaded from and saved to a JSON file

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::LogError;
use crate::estimator::{Set, estimate_max};
use crate::exercises::find_exercise;

/// One logged set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub weight: f64,
    pub reps: i32,
    /// Marks the set taken to failure, used for max tracking
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub tracked: bool,
}

impl SetRecord {
    pub fn as_set(&self) -> Set {
        Set::new(self.weight, self.reps)
    }

    pub fn estimated_max(&self) -> f64 {
        estimate_max(self.as_set())
    }
}

/// Parses "225x5", "225×5" or "100 x 8*" (trailing `*` marks the tracked set)
impl FromStr for SetRecord {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LogError::InvalidSet(s.to_string());

        let trimmed = s.trim();
        let (body, tracked) = match trimmed.strip_suffix('*') {
            Some(body) => (body, true),
            None => (trimmed, false),
        };

        let (weight, reps) = body
            .split_once(['x', 'X', '×'])
            .ok_or_else(invalid)?;
        let weight: f64 = weight.trim().parse().map_err(|_| invalid())?;
        let reps: i32 = reps.trim().parse().map_err(|_| invalid())?;
        if !weight.is_finite() {
            return Err(invalid());
        }

        Ok(Self { weight, reps, tracked })
    }
}

/// A day's work on one exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub exercise: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub sets: Vec<SetRecord>,
}

impl Entry {
    pub fn has_tracked_set(&self) -> bool {
        self.sets.iter().any(|s| s.tracked)
    }

    /// Best estimate among tracked sets with reps
    pub fn tracked_max(&self) -> Option<f64> {
        self.sets
            .iter()
            .filter(|s| s.tracked && s.reps > 0)
            .map(SetRecord::estimated_max)
            .max_by(f64::total_cmp)
    }
}

#[derive(Debug, Deserialize)]
struct LogFile {
    #[serde(default)]
    entries: Vec<Entry>,
}

#[derive(Serialize)]
struct LogFileRef<'a> {
    entries: &'a [Entry],
}

fn check_weights(entry_idx: usize, entry: &Entry) -> Result<(), LogError> {
    match entry.sets.iter().position(|s| s.weight < 0.0) {
        Some(set_idx) => Err(LogError::NegativeWeight {
            entry: entry_idx,
            set: set_idx,
            value: entry.sets[set_idx].weight,
        }),
        None => Ok(()),
    }
}

/// Sibling path the log is written to before being renamed into place
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "liftlog.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}

/// All entries, most recent first
#[derive(Debug, Clone, Default)]
pub struct WorkoutLog {
    entries: Vec<Entry>,
}

impl WorkoutLog {
    /// Load a log from a JSON file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LogError::FileNotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path)
            .map_err(|e| LogError::CannotRead(format!("{}: {}", path.display(), e)))?;
        let file: LogFile = serde_json::from_str(&raw)?;

        let log = Self::from_entries(file.entries)?;
        info!("Loaded {} entries from {}", log.entries.len(), path.display());
        Ok(log)
    }

    /// Build a log from entries, validating weights and sorting by date
    pub fn from_entries(mut entries: Vec<Entry>) -> Result<Self, LogError> {
        for (entry_idx, entry) in entries.iter().enumerate() {
            check_weights(entry_idx, entry)?;
            if find_exercise(&entry.exercise).is_none() {
                debug!("Entry {} uses custom exercise '{}'", entry_idx, entry.exercise);
            }
            if entry.sets.iter().filter(|s| s.tracked).count() > 1 {
                warn!(
                    "Entry {} ({} on {}) has more than one tracked set",
                    entry_idx, entry.exercise, entry.date
                );
            }
        }

        // Stable: same-day entries keep file order
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(Self { entries })
    }

    /// Open a log, or start an empty one when the file does not exist yet
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self, LogError> {
        match Self::open(path) {
            Err(LogError::FileNotFound(p)) => {
                info!("No log at {}, starting a new one", p);
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Add an entry, keeping the log newest first.
    ///
    /// An entry may carry at most one tracked set. It goes ahead of any
    /// existing entries on the same date.
    pub fn add_entry(&mut self, entry: Entry) -> Result<(), LogError> {
        check_weights(self.entries.len(), &entry)?;
        if entry.sets.iter().filter(|s| s.tracked).count() > 1 {
            return Err(LogError::MultipleTrackedSets {
                exercise: entry.exercise,
                date: entry.date,
            });
        }

        let pos = self.entries.partition_point(|e| e.date > entry.date);
        debug!("Adding {} on {} at position {}", entry.exercise, entry.date, pos);
        self.entries.insert(pos, entry);
        Ok(())
    }

    /// Write the log as JSON. The file is replaced in one rename so a failed
    /// write leaves the previous contents intact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LogError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&LogFileRef {
            entries: &self.entries,
        })?;

        let staging = staging_path(path);
        fs::write(&staging, json)
            .map_err(|e| LogError::CannotWrite(format!("{}: {}", staging.display(), e)))?;
        if let Err(e) = fs::rename(&staging, path) {
            let _ = fs::remove_file(&staging);
            return Err(LogError::CannotWrite(format!("{}: {}", path.display(), e)));
        }

        info!("Saved {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for one exercise, most recent first
    pub fn entries_for(&self, exercise: &str) -> Vec<&Entry> {
        let exercise = exercise.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.exercise.to_lowercase() == exercise)
            .collect()
    }

    /// Distinct exercise names in order of first appearance
    pub fn exercise_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !names.iter().any(|n| n.eq_ignore_ascii_case(&entry.exercise)) {
                names.push(&entry.exercise);
            }
        }
        names
    }

    pub fn last_entry(&self, exercise: &str) -> Option<&Entry> {
        self.entries_for(exercise).into_iter().next()
    }

    /// Most recent entry with a tracked set
    pub fn last_tracked_entry(&self, exercise: &str) -> Option<&Entry> {
        self.entries_for(exercise)
            .into_iter()
            .find(|e| e.has_tracked_set())
    }
}
