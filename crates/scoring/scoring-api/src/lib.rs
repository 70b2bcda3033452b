//! Anomaly Scoring API
//!
//! Configuration types and builders for the scoring pipeline.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use scoring_spi::{
    DetectionSummary, FeatureMatrix, OutlierModel, Reading, Result, ScoredReading, ScoringError,
    Severity,
};

// ============================================================================
// Forest Configuration
// ============================================================================

/// Isolation forest configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of trees in the ensemble (default: 100).
    pub n_trees: usize,
    /// Subsample size per tree (default: 256, capped at the batch size).
    pub sample_size: usize,
    /// Maximum tree depth; `None` uses ceil(log2(sample_size)).
    pub max_depth: Option<usize>,
    /// Expected fraction of anomalous points (default: 0.1).
    pub contamination: f64,
    /// Random seed for reproducible sampling (default: 42).
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            sample_size: 256,
            max_depth: None,
            contamination: 0.1,
            seed: 42,
        }
    }
}

impl ForestConfig {
    /// Create a configuration with a custom contamination and seed.
    pub fn new(contamination: f64, seed: u64) -> Self {
        Self {
            contamination,
            seed,
            ..Self::default()
        }
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.n_trees == 0 {
            return Err(ScoringError::InvalidParameter {
                name: "n_trees".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.sample_size < 2 {
            return Err(ScoringError::InvalidParameter {
                name: "sample_size".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        if !(self.contamination > 0.0 && self.contamination <= 0.5) {
            return Err(ScoringError::InvalidParameter {
                name: "contamination".to_string(),
                reason: "must be in (0, 0.5]".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Severity Thresholds
// ============================================================================

/// Fixed thresholds mapping a fused score to a severity level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityThresholds {
    /// Scores at or above this are at least Info (default: 0.3).
    pub info: f64,
    /// Scores at or above this are at least Warning (default: 0.5).
    pub warning: f64,
    /// Scores at or above this are Critical (default: 0.8).
    pub critical: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            info: 0.3,
            warning: 0.5,
            critical: 0.8,
        }
    }
}

impl SeverityThresholds {
    /// Validate that thresholds are ordered and in [0, 1].
    pub fn validate(&self) -> Result<()> {
        let ordered = 0.0 <= self.info && self.info <= self.warning && self.warning <= self.critical;
        if !ordered || self.critical > 1.0 {
            return Err(ScoringError::InvalidParameter {
                name: "thresholds".to_string(),
                reason: "require 0 <= info <= warning <= critical <= 1".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Score Weights
// ============================================================================

/// Convex weights fusing the three normalized anomaly signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Isolation forest weight (default: 0.5).
    pub isolation: f64,
    /// Z-score weight (default: 0.3).
    pub z: f64,
    /// SPC weight (default: 0.2).
    pub spc: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            isolation: 0.5,
            z: 0.3,
            spc: 0.2,
        }
    }
}

impl ScoreWeights {
    /// Validate that weights are non-negative and sum to 1.
    pub fn validate(&self) -> Result<()> {
        let non_negative = self.isolation >= 0.0 && self.z >= 0.0 && self.spc >= 0.0;
        let sum = self.isolation + self.z + self.spc;
        if !non_negative || (sum - 1.0).abs() > 1e-9 {
            return Err(ScoringError::InvalidParameter {
                name: "weights".to_string(),
                reason: format!("must be non-negative and sum to 1, got {}", sum),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Detector Configuration
// ============================================================================

/// Configuration for the ensemble detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Outlier model configuration.
    pub forest: ForestConfig,
    /// Severity thresholds.
    pub thresholds: SeverityThresholds,
    /// Fusion weights.
    pub weights: ScoreWeights,
    /// Trailing window for rolling statistics (default: 3).
    pub rolling_window: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            forest: ForestConfig::default(),
            thresholds: SeverityThresholds::default(),
            weights: ScoreWeights::default(),
            rolling_window: 3,
        }
    }
}

impl DetectorConfig {
    /// Create a configuration with a custom contamination and seed.
    pub fn new(contamination: f64, seed: u64) -> Self {
        Self {
            forest: ForestConfig::new(contamination, seed),
            ..Self::default()
        }
    }

    /// Validate all nested parameters.
    pub fn validate(&self) -> Result<()> {
        self.forest.validate()?;
        self.thresholds.validate()?;
        self.weights.validate()?;
        if self.rolling_window == 0 {
            return Err(ScoringError::InvalidParameter {
                name: "rolling_window".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
