//! Strength trend using linear regression (linfa)

use chrono::NaiveDate;
use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};

use super::DataPoint;
use crate::units::Unit;

/// Minimum data points required for fitting
const MIN_DATA_POINTS: usize = 3;

/// Linear fit of estimated max over time
pub struct StrengthTrend {
    slope: f64,
    intercept: f64,
    r2_score: f64,
    data_points: usize,
    first_date: NaiveDate,
    last_date: NaiveDate,
}

impl StrengthTrend {
    /// Fit a trend to an estimated max series (any order)
    pub fn fit(series: &[DataPoint]) -> Option<Self> {
        if series.len() < MIN_DATA_POINTS {
            return None;
        }

        let first_date = series.iter().map(|p| p.date).min()?;
        let last_date = series.iter().map(|p| p.date).max()?;

        // Everything on one day has no slope to fit
        if first_date == last_date {
            return None;
        }

        // X = days since first entry, Y = estimated max
        let x_data: Vec<f64> = series
            .iter()
            .map(|p| (p.date - first_date).num_days() as f64)
            .collect();
        let y_data: Vec<f64> = series.iter().map(|p| p.value).collect();

        let n_samples = x_data.len();
        let records = Array2::from_shape_vec((n_samples, 1), x_data).ok()?;
        let targets = Array1::from_vec(y_data);
        let dataset = Dataset::new(records, targets);

        let model = LinearRegression::default().fit(&dataset).ok()?;

        let slope = model.params()[0];
        let intercept = model.intercept();

        let predictions = model.predict(&dataset);
        let r2_score = predictions.r2(&dataset).unwrap_or(0.0);

        Some(Self {
            slope,
            intercept,
            r2_score,
            data_points: n_samples,
            first_date,
            last_date,
        })
    }

    /// Predicted estimated max `days_ahead` days after the last entry
    pub fn predict(&self, days_ahead: i64) -> f64 {
        let day = (self.last_date - self.first_date).num_days() + days_ahead;
        self.slope * day as f64 + self.intercept
    }

    /// Change in estimated max per day
    pub fn daily_progress(&self) -> f64 {
        self.slope
    }

    /// Model fit quality, 0-1
    pub fn r2_score(&self) -> f64 {
        self.r2_score
    }

    pub fn data_points(&self) -> usize {
        self.data_points
    }

    /// Format trend for the stats command
    pub fn format(&self, unit: Unit) -> String {
        let weekly = unit.scale(self.slope * 7.0);
        let trend_str = if weekly >= 0.0 {
            format!("+{:.1}", weekly)
        } else {
            format!("{:.1}", weekly)
        };

        [
            "--- Trend ---".to_string(),
            format!("Trend: {} {}/week", trend_str, unit.suffix()),
            format!("In 4 weeks: ~{}", unit.format(self.predict(28).round())),
            format!(
                "Fit (R²): {:.2} over {} entries",
                self.r2_score, self.data_points
            ),
        ]
        .join("\n")
    }
}
