//! Anomaly Scoring Service Provider Interface
//!
//! Defines traits, errors, and data models for the scoring pipeline.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::OutlierModel;
pub use error::{Result, ScoringError};
pub use model::{DetectionSummary, FeatureMatrix, Reading, ScoredReading, Severity};
