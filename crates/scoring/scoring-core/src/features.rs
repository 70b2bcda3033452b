//! Per-reading feature extraction.

use chrono::{Datelike, Timelike};
use scoring_spi::{FeatureMatrix, Reading, Result, ScoringError};
use tracing::debug;

use crate::stats::sample_std;

/// Turns an ordered reading sequence into per-point feature vectors.
///
/// The raw value and rolling statistics are always present. Calendar
/// features and the first difference are added only when the batch
/// supports them; the decision is made once per batch, never per
/// point.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    window: usize,
}

impl FeatureExtractor {
    /// Create an extractor with the given trailing window size.
    pub fn new(window: usize) -> Self {
        Self { window: window.max(1) }
    }

    /// Extract one feature row per reading, in input order.
    pub fn extract(&self, readings: &[Reading]) -> Result<FeatureMatrix> {
        if readings.is_empty() {
            return Err(ScoringError::EmptyBatch);
        }

        let values: Vec<f64> = readings.iter().map(|r| r.value).collect();
        let mut columns = vec![values.clone()];

        let (rolling_mean, rolling_std) = self.rolling_stats(&values);
        columns.push(rolling_mean);
        columns.push(rolling_std);

        // Calendar features are a batch-level decision: either every
        // reading has a timestamp or the columns are omitted entirely.
        if readings.iter().all(|r| r.timestamp.is_some()) {
            let mut hours = Vec::with_capacity(readings.len());
            let mut weekdays = Vec::with_capacity(readings.len());
            for reading in readings {
                let ts = reading.timestamp.ok_or(ScoringError::EmptyBatch)?;
                hours.push(ts.hour() as f64);
                weekdays.push(ts.weekday().num_days_from_monday() as f64);
            }
            columns.push(hours);
            columns.push(weekdays);
        } else {
            debug!("calendar features omitted: batch has readings without timestamps");
        }

        if values.len() > 1 {
            let mut diffs = Vec::with_capacity(values.len());
            diffs.push(0.0);
            for pair in values.windows(2) {
                diffs.push(pair[1] - pair[0]);
            }
            columns.push(diffs);
        } else {
            debug!("first-difference feature omitted: single-reading batch");
        }

        FeatureMatrix::from_columns(columns)
    }

    /// Trailing rolling mean and sample std with minimum period 1.
    fn rolling_stats(&self, values: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let mut means = Vec::with_capacity(values.len());
        let mut stds = Vec::with_capacity(values.len());
        for i in 0..values.len() {
            let start = (i + 1).saturating_sub(self.window);
            let window = &values[start..=i];
            means.push(window.iter().sum::<f64>() / window.len() as f64);
            stds.push(sample_std(window));
        }
        (means, stds)
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(3)
    }
}
