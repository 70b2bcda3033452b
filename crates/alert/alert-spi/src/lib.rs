//! Alert Export Service Provider Interface
//!
//! Defines errors and data models for the daily alert export
//! pipeline.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{ExportError, Result};
pub use model::{
    Alert, BatchResult, DailyExport, DailySummary, ExportStatus, TrendDirection,
};
