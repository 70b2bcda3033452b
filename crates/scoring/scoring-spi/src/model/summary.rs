//! Batch-level detection summary.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{ScoredReading, Severity};

/// Summary statistics over one scored batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSummary {
    /// Total readings in the batch.
    pub total_data_points: usize,
    /// Readings whose fused score crossed the info threshold.
    pub total_anomalies: usize,
    /// Anomaly rate as a percentage of the batch.
    pub anomaly_rate: f64,
    /// Flagged readings graded Critical.
    pub critical_anomalies: usize,
    /// Flagged readings graded Warning.
    pub warning_anomalies: usize,
    /// Flagged readings graded Info.
    pub info_anomalies: usize,
    /// Mean fused score among flagged readings (0 when none).
    pub avg_anomaly_score: f64,
    /// Highest fused score among flagged readings (0 when none).
    pub max_anomaly_score: f64,
    /// Timestamp of the highest-scoring flagged reading, if any.
    pub most_severe_timestamp: Option<NaiveDateTime>,
}

impl DetectionSummary {
    /// Summarize a scored batch.
    pub fn from_scored(scored: &[ScoredReading]) -> Self {
        let total = scored.len();
        let anomalies: Vec<&ScoredReading> = scored.iter().filter(|s| s.anomaly_flag).collect();

        let count_level = |level: Severity| -> usize {
            anomalies.iter().filter(|s| s.severity == level).count()
        };

        let (avg_score, max_score, most_severe) = if anomalies.is_empty() {
            (0.0, 0.0, None)
        } else {
            let sum: f64 = anomalies.iter().map(|s| s.anomaly_score).sum();
            let worst = anomalies
                .iter()
                .max_by(|a, b| a.anomaly_score.total_cmp(&b.anomaly_score))
                .expect("non-empty");
            (
                sum / anomalies.len() as f64,
                worst.anomaly_score,
                worst.reading.timestamp,
            )
        };

        Self {
            total_data_points: total,
            total_anomalies: anomalies.len(),
            anomaly_rate: if total == 0 {
                0.0
            } else {
                anomalies.len() as f64 / total as f64 * 100.0
            },
            critical_anomalies: count_level(Severity::Critical),
            warning_anomalies: count_level(Severity::Warning),
            info_anomalies: count_level(Severity::Info),
            avg_anomaly_score: avg_score,
            max_anomaly_score: max_score,
            most_severe_timestamp: most_severe,
        }
    }
}
