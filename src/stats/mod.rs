//! Stats module - strength trends derived from the workout log
//!
//! Features:
//! - Heaviest set and top estimated one-rep max
//! - Lift frequency over a trailing window
//! - Per-entry estimated max series for charting
//! - Linear strength trend (linfa)

pub mod trend;

pub use trend::StrengthTrend;

use chrono::NaiveDate;

use crate::estimator::reps_from_estimated_max;
use crate::time_ago::time_ago;
use crate::units::Unit;
use crate::workout::{Entry, SetRecord, WorkoutLog};

/// Window used for the frequency stat
pub const FREQUENCY_WINDOW_DAYS: i64 = 30;

/// A point on the estimated max chart
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A notable set together with the entry it belongs to
#[derive(Debug, Clone, Copy)]
pub struct SetHighlight<'a> {
    pub entry: &'a Entry,
    pub set: &'a SetRecord,
    pub estimated_max: f64,
}

/// "1 rep", "5 reps"
pub fn pluralize(word: &str, count: i64) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Analytics over the entries of a single exercise
pub struct Analytics {
    /// Most recent first
    entries: Vec<Entry>,
}

impl Analytics {
    pub fn new(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Self { entries }
    }

    pub fn for_exercise(log: &WorkoutLog, exercise: &str) -> Self {
        Self::new(log.entries_for(exercise).into_iter().cloned().collect())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// All sets with at least one rep, most recent entry first
    fn performed_sets(&self) -> impl Iterator<Item = SetHighlight<'_>> {
        self.entries.iter().flat_map(|entry| {
            entry.sets.iter().filter(|s| s.reps > 0).map(move |set| SetHighlight {
                entry,
                set,
                estimated_max: set.estimated_max(),
            })
        })
    }

    /// Heaviest weight lifted for at least one rep. Ties go to the most recent.
    pub fn heaviest_set(&self) -> Option<SetHighlight<'_>> {
        self.performed_sets().fold(None, |best, candidate| match best {
            Some(b) if b.set.weight >= candidate.set.weight => Some(b),
            _ => Some(candidate),
        })
    }

    /// Set with the highest estimated one-rep max
    pub fn top_estimated_max(&self) -> Option<SetHighlight<'_>> {
        self.performed_sets().fold(None, |best, candidate| match best {
            Some(b) if b.estimated_max >= candidate.estimated_max => Some(b),
            _ => Some(candidate),
        })
    }

    /// Number of entries dated fewer than `days` days before `today`
    pub fn frequency(&self, today: NaiveDate, days: i64) -> usize {
        self.entries
            .iter()
            .filter(|e| (today - e.date).num_days() < days)
            .count()
    }

    /// Best tracked estimate per entry, oldest first
    pub fn estimated_max_series(&self) -> Vec<DataPoint> {
        self.entries
            .iter()
            .rev()
            .filter_map(|e| {
                e.tracked_max().map(|value| DataPoint {
                    date: e.date,
                    value,
                })
            })
            .collect()
    }

    /// Estimated max from the most recent entry with a tracked set
    pub fn last_tracked_max(&self) -> Option<f64> {
        self.entries.iter().find_map(Entry::tracked_max)
    }

    /// Reps at `weight` needed to reach the last tracked max.
    /// Matching the max exactly counts; one more rep is needed to exceed it.
    pub fn reps_to_reach(&self, weight: f64) -> Option<u32> {
        self.last_tracked_max()
            .and_then(|max| reps_from_estimated_max(max, weight))
    }

    /// Report lines for the stats command
    pub fn summary(&self, today: NaiveDate, unit: Unit) -> Vec<String> {
        let mut lines = Vec::new();

        match self.heaviest_set() {
            Some(h) => lines.push(format!(
                "Heaviest set: {} · {} · {}",
                unit.format(h.set.weight),
                pluralize("rep", h.set.reps as i64),
                time_ago(h.entry.date, today)
            )),
            None => lines.push("Heaviest set: -".to_string()),
        }

        match self.top_estimated_max() {
            Some(t) => lines.push(format!(
                "Top est. 1RM: {} ({} · {})",
                unit.format(t.estimated_max.floor()),
                unit.format(t.set.weight),
                pluralize("rep", t.set.reps as i64)
            )),
            None => lines.push("Top est. 1RM: -".to_string()),
        }

        let freq = self.frequency(today, FREQUENCY_WINDOW_DAYS);
        lines.push(format!(
            "Frequency: {} in the past {} days",
            pluralize("lift", freq as i64),
            FREQUENCY_WINDOW_DAYS
        ));

        if let Some(max) = self.last_tracked_max() {
            lines.push(format!("Last tracked max: {}", unit.format(max.floor())));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(weight: f64, reps: i32, tracked: bool) -> SetRecord {
        SetRecord { weight, reps, tracked }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn entry(day: u32, sets: Vec<SetRecord>) -> Entry {
        Entry {
            id: None,
            exercise: "Bench press".to_string(),
            date: date(day),
            notes: None,
            sets,
        }
    }

    fn sample() -> Analytics {
        Analytics::new(vec![
            entry(1, vec![set(185.0, 5, true), set(205.0, 1, false)]),
            entry(8, vec![set(195.0, 5, true)]),
            entry(15, vec![set(225.0, 0, true), set(135.0, 10, false)]),
            entry(22, vec![set(200.0, 5, true), set(205.0, 2, false)]),
        ])
    }

    #[test]
    fn test_analytics_new_sorts() {
        let analytics = sample();
        assert_eq!(analytics.entries()[0].date, date(22));
        assert_eq!(analytics.entries()[3].date, date(1));
    }

    #[test]
    fn test_heaviest_set_skips_zero_reps() {
        let analytics = sample();
        let heaviest = analytics.heaviest_set().unwrap();
        // 225 × 0 does not count; 205 ties, most recent wins
        assert_eq!(heaviest.set.weight, 205.0);
        assert_eq!(heaviest.entry.date, date(22));
    }

    #[test]
    fn test_heaviest_set_empty() {
        let analytics = Analytics::new(vec![]);
        assert!(analytics.heaviest_set().is_none());
        assert!(analytics.top_estimated_max().is_none());
    }

    #[test]
    fn test_top_estimated_max() {
        let analytics = sample();
        let top = analytics.top_estimated_max().unwrap();
        // 200 × 5 (≈235.0) outranks the heavier 205 × 2 (≈215.2)
        assert_eq!(top.set.weight, 200.0);
        assert!((top.estimated_max - 235.02).abs() < 0.05, "got {}", top.estimated_max);
    }

    #[test]
    fn test_frequency_window() {
        let analytics = sample();
        assert_eq!(analytics.frequency(date(22), 30), 4);
        assert_eq!(analytics.frequency(date(30), 30), 4);
        // June 1 is exactly 30 days before July 1
        let july_first = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(analytics.frequency(july_first, 30), 3);
        assert_eq!(analytics.frequency(date(22), 7), 1);
    }

    #[test]
    fn test_estimated_max_series() {
        let analytics = sample();
        let series = analytics.estimated_max_series();
        // The 15th has only an untracked set with reps
        let dates: Vec<_> = series.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(1), date(8), date(22)]);
        assert!(series[0].value < series[1].value);
        assert!(series[1].value < series[2].value);
    }

    #[test]
    fn test_last_tracked_max() {
        let analytics = sample();
        let max = analytics.last_tracked_max().unwrap();
        assert!((max - 200.0 / 0.850995).abs() < 1e-9);
    }

    #[test]
    fn test_reps_to_reach() {
        let analytics = sample();
        assert_eq!(analytics.reps_to_reach(200.0), Some(5));
        assert_eq!(analytics.reps_to_reach(250.0), None);
        let more = analytics.reps_to_reach(185.0).unwrap();
        assert!(more > 5);
    }

    #[test]
    fn test_reps_to_reach_counts_tie() {
        let analytics = sample();
        let max = analytics.last_tracked_max().unwrap();
        let reps = analytics.reps_to_reach(195.0).unwrap() as i32;

        // The answer reaches the old max; one rep fewer falls short
        assert!(SetRecord { weight: 195.0, reps, tracked: true }.estimated_max() >= max);
        assert!(SetRecord { weight: 195.0, reps: reps - 1, tracked: true }.estimated_max() < max);

        // Repeating the tracked set exactly is reported, not bumped by a rep
        let repeat = Analytics::new(vec![entry(1, vec![set(200.0, 5, true)])]);
        assert_eq!(repeat.reps_to_reach(200.0), Some(5));
    }

    #[test]
    fn test_reps_to_reach_without_history() {
        let analytics = Analytics::new(vec![entry(1, vec![set(100.0, 5, false)])]);
        assert!(analytics.reps_to_reach(100.0).is_none());
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("rep", 1), "1 rep");
        assert_eq!(pluralize("rep", 0), "0 reps");
        assert_eq!(pluralize("lift", 4), "4 lifts");
    }

    #[test]
    fn test_summary_lines() {
        let analytics = sample();
        let lines = analytics.summary(date(24), Unit::Pounds);
        assert_eq!(lines[0], "Heaviest set: 205lbs · 2 reps · 2 days ago");
        assert_eq!(lines[1], "Top est. 1RM: 235lbs (200lbs · 5 reps)");
        assert_eq!(lines[2], "Frequency: 4 lifts in the past 30 days");
        assert_eq!(lines[3], "Last tracked max: 235lbs");
    }

    #[test]
    fn test_summary_empty() {
        let lines = Analytics::new(vec![]).summary(date(1), Unit::Kilos);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Heaviest set: -");
        assert_eq!(lines[2], "Frequency: 0 lifts in the past 30 days");
    }
}
