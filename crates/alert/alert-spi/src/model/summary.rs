//! Daily summary aggregate.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate over one day's alerts, persisted beside the alert file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    /// Calendar day the alerts belong to.
    pub export_date: NaiveDate,
    /// Number of alert rows exported.
    pub total_alerts: usize,
    /// Alert counts keyed by severity name.
    pub severity_breakdown: BTreeMap<String, usize>,
    /// Critical alert count.
    pub critical_alerts: usize,
    /// Warning alert count.
    pub warning_alerts: usize,
    /// Info alert count.
    pub info_alerts: usize,
    /// Mean energy output across the day's alerts.
    pub avg_energy_output: f64,
    /// Minimum energy output across the day's alerts.
    pub min_energy_output: f64,
    /// Maximum energy output across the day's alerts.
    pub max_energy_output: f64,
    /// Mean deviation percentage.
    pub avg_deviation: f64,
    /// Maximum deviation percentage.
    pub max_deviation: f64,
    /// Most common trend direction, or "N/A" for an empty day.
    pub primary_trend: String,
    /// Distinct affected units.
    pub systems_affected: usize,
    /// "Critical" if any critical alert, "Normal" otherwise,
    /// "No alerts" for an empty day.
    pub status: String,
    /// Wall-clock time the summary was generated.
    pub export_timestamp: String,
    /// Escalation recommendations for the day.
    pub recommendations: Vec<String>,
}
