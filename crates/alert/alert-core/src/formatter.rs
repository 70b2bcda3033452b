//! Alert derivation for one calendar day.

use alert_spi::{Alert, TrendDirection};
use chrono::{Local, NaiveDate};
use scoring_spi::{ScoredReading, Severity};

const UNITS_AFFECTED: &str = "Primary System";
const MEAN_EPSILON: f64 = 1e-8;

/// Derive export-ready alert records for one calendar day.
///
/// Readings are selected by timestamp; readings without one never
/// match a day. Expected range and deviation are computed over the
/// day's own alert set, and `alert_id` restarts at 1 for every day.
pub fn daily_alerts(scored: &[ScoredReading], date: NaiveDate) -> Vec<Alert> {
    let day: Vec<&ScoredReading> = scored
        .iter()
        .filter(|s| s.reading.timestamp.map(|ts| ts.date()) == Some(date))
        .collect();
    if day.is_empty() {
        return Vec::new();
    }

    let values: Vec<f64> = day.iter().map(|s| s.reading.value).collect();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let std = sample_std(&values);
    let expected_min = (mean - 2.0 * std).max(0.0);
    let expected_max = mean + 2.0 * std;
    let trend = trend_direction(&values);
    let created_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    day.iter()
        .enumerate()
        .map(|(i, s)| Alert {
            alert_id: i as u32 + 1,
            timestamp: s
                .reading
                .timestamp
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            energy_kwh: s.reading.value,
            severity: s.severity,
            anomaly_score: s.anomaly_score,
            deviation_percentage: deviation_percentage(s.reading.value, mean),
            expected_min,
            expected_max,
            system_status: system_status(s.severity).to_string(),
            recommended_action: s.recommended_action.clone(),
            units_affected: UNITS_AFFECTED.to_string(),
            trend_direction: trend,
            created_at: created_at.clone(),
        })
        .collect()
}

/// Absolute deviation from the day mean in percent, rounded to two
/// decimals. A zero mean deviates nothing rather than dividing by it.
fn deviation_percentage(value: f64, mean: f64) -> f64 {
    if mean.abs() < MEAN_EPSILON {
        return 0.0;
    }
    let raw = ((value - mean) / mean * 100.0).abs();
    (raw * 100.0).round() / 100.0
}

fn system_status(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "Requires Immediate Attention",
        Severity::Warning => "Monitoring Required",
        Severity::Info => "Normal Operation",
        Severity::Normal => "Operating Normally",
    }
}

fn trend_direction(values: &[f64]) -> TrendDirection {
    if values.len() == 1 {
        return TrendDirection::SinglePoint;
    }
    if values.windows(2).all(|w| w[1] <= w[0]) {
        TrendDirection::Declining
    } else {
        TrendDirection::Variable
    }
}

fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64).sqrt()
}
