//! Per-day export outcome types.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DailySummary;

/// Outcome status of one day's export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    Success,
    Failed,
}

/// Result of exporting a single day within a batch.
///
/// Accumulated by the batch exporter for every requested day,
/// successes and failures alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// The exported calendar day.
    pub date: NaiveDate,
    /// Path of the written alert file, if the day succeeded.
    pub file_path: Option<PathBuf>,
    /// Number of alert rows written.
    pub alert_count: usize,
    /// Whether the day's export succeeded.
    pub status: ExportStatus,
    /// Error message for a failed day.
    pub error: Option<String>,
}

/// Successful single-day export artifacts.
#[derive(Debug, Clone)]
pub struct DailyExport {
    /// Path of the written alert CSV.
    pub file_path: PathBuf,
    /// Number of alert rows written.
    pub alert_count: usize,
    /// The summary persisted beside the alert file.
    pub summary: DailySummary,
}
