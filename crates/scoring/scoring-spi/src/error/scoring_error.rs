//! Anomaly scoring error types.

use thiserror::Error;

/// Anomaly scoring errors.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Model not fitted: call fit() before detect()")]
    NotFitted,

    #[error("Empty batch: at least one reading is required")]
    EmptyBatch,

    #[error("Feature mismatch: model fitted with {expected} features, got {got}")]
    FeatureMismatch { expected: usize, got: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, ScoringError>;
