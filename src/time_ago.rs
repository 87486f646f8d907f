//! Relative day labels ("Today", "3 days ago")

use chrono::{Local, NaiveDate};

/// Label `date` relative to `today`, counting whole calendar days.
pub fn time_ago(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    match days {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        -1 => "in 1 day".to_string(),
        d if d > 0 => format!("{} days ago", d),
        d => format!("in {} days", -d),
    }
}

/// Same as [`time_ago`] against the local calendar date.
pub fn time_ago_from_now(date: NaiveDate) -> String {
    time_ago(date, Local::now().date_naive())
}
