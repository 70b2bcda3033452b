//! Scored reading type.

use serde::{Deserialize, Serialize};

use super::{Reading, Severity};

/// A reading augmented with the full set of anomaly signals.
///
/// Each pipeline stage returns new value objects rather than mutating
/// shared state, so a `ScoredReading` owns a copy of its source
/// reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredReading {
    /// The source reading.
    #[serde(flatten)]
    pub reading: Reading,
    /// Raw isolation decision score (lower = more anomalous).
    pub isolation_score: f64,
    /// Absolute z-score against the batch mean.
    pub z_score: f64,
    /// SPC control-limit exceedance score.
    pub spc_score: f64,
    /// Fused anomaly score in [0, 1].
    pub anomaly_score: f64,
    /// Whether the fused score exceeds the info threshold.
    pub anomaly_flag: bool,
    /// Severity grade of the fused score.
    pub severity: Severity,
    /// Recommended operator action.
    pub recommended_action: String,
}
