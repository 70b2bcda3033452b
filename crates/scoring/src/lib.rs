//! # gridpulse-scoring
//!
//! Multi-signal anomaly scoring for energy-output readings.
//!
//! This facade provides a single entry point to the scoring module:
//! - `OutlierModel` trait, errors, and data models from SPI
//! - Configuration types from API
//! - Feature extraction, the isolation forest, statistical scorers,
//!   score fusion, severity grading, and the `EnsembleDetector` from
//!   Core

// Re-export everything from SPI
pub use scoring_spi::*;

// Re-export everything from API
pub use scoring_api::*;

// Re-export everything from Core
pub use scoring_core::*;
