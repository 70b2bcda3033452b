//! Export-ready alert record.

use std::fmt;

use scoring_spi::Severity;
use serde::{Deserialize, Serialize};

/// Direction of energy output across one day's alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    /// Values are monotonically non-increasing across the day.
    Declining,
    /// Values move in both directions.
    Variable,
    /// Only one alert exists for the day.
    #[serde(rename = "Single Point")]
    SinglePoint,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrendDirection::Declining => "Declining",
            TrendDirection::Variable => "Variable",
            TrendDirection::SinglePoint => "Single Point",
        };
        write!(f, "{}", name)
    }
}

/// One row of the daily alert export.
///
/// Written once to the export file and never mutated afterwards. The
/// column set and order are fixed so downstream consumers never see
/// schema drift between empty and non-empty days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Dense 1-indexed id, reset at the start of every day's batch.
    pub alert_id: u32,
    /// Reading timestamp, formatted; empty when the reading had none.
    pub timestamp: String,
    /// Energy output in kWh.
    pub energy_kwh: f64,
    /// Severity grade of the reading.
    pub severity: Severity,
    /// Fused anomaly score.
    pub anomaly_score: f64,
    /// Absolute deviation from the day mean, in percent.
    pub deviation_percentage: f64,
    /// Lower edge of the expected range for the day.
    pub expected_min: f64,
    /// Upper edge of the expected range for the day.
    pub expected_max: f64,
    /// Operational status derived from severity.
    pub system_status: String,
    /// Recommended operator action.
    pub recommended_action: String,
    /// Affected unit label.
    pub units_affected: String,
    /// Trend across the day's alerts.
    pub trend_direction: TrendDirection,
    /// Wall-clock time the record was created.
    pub created_at: String,
}

impl Alert {
    /// Fixed export column names, in schema order.
    pub const COLUMNS: [&'static str; 13] = [
        "alert_id",
        "timestamp",
        "energy_kwh",
        "severity",
        "anomaly_score",
        "deviation_percentage",
        "expected_min",
        "expected_max",
        "system_status",
        "recommended_action",
        "units_affected",
        "trend_direction",
        "created_at",
    ];
}
