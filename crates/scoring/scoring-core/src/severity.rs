//! Severity classification.

use scoring_api::SeverityThresholds;
use scoring_spi::Severity;

/// Map a fused anomaly score to a severity level.
///
/// Pure and monotonic; a score equal to a threshold counts as having
/// met it.
pub fn classify_severity(score: f64, thresholds: &SeverityThresholds) -> Severity {
    if score >= thresholds.critical {
        Severity::Critical
    } else if score >= thresholds.warning {
        Severity::Warning
    } else if score >= thresholds.info {
        Severity::Info
    } else {
        Severity::Normal
    }
}
