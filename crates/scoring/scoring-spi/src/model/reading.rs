//! Energy-output reading types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single energy-output reading.
///
/// Readings form an ordered sequence; order is load-bearing for
/// rolling statistics, rate of change, and trend direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Timestamp of the reading, if one was recorded.
    pub timestamp: Option<NaiveDateTime>,
    /// Energy output in kWh.
    pub value: f64,
}

impl Reading {
    /// Create a reading without a timestamp.
    pub fn new(value: f64) -> Self {
        Self {
            timestamp: None,
            value,
        }
    }

    /// Create a reading with a timestamp.
    pub fn at(timestamp: NaiveDateTime, value: f64) -> Self {
        Self {
            timestamp: Some(timestamp),
            value,
        }
    }
}
