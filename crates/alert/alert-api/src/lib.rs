//! Alert Export API
//!
//! Configuration types and builders for the alert export pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use alert_spi::{
    Alert, BatchResult, DailyExport, DailySummary, ExportError, ExportStatus, Result,
    TrendDirection,
};

/// Configuration for the alert exporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Directory export files are written to.
    pub output_dir: PathBuf,
    /// Filename prefix for daily files (default: "alerts").
    pub filename_prefix: String,
    /// Rolling window length in days for batch exports (default: 7).
    pub window_days: u32,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./exports"),
            filename_prefix: "alerts".to_string(),
            window_days: 7,
        }
    }
}

impl ExporterConfig {
    /// Create a configuration writing to the given directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

/// Builder for ExporterConfig.
#[derive(Debug, Default)]
pub struct ExporterConfigBuilder {
    output_dir: Option<PathBuf>,
    filename_prefix: Option<String>,
    window_days: Option<u32>,
}

impl ExporterConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Set the filename prefix.
    pub fn filename_prefix(mut self, prefix: &str) -> Self {
        self.filename_prefix = Some(prefix.to_string());
        self
    }

    /// Set the batch window length in days.
    pub fn window_days(mut self, days: u32) -> Self {
        self.window_days = Some(days);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ExporterConfig {
        let defaults = ExporterConfig::default();
        ExporterConfig {
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            filename_prefix: self.filename_prefix.unwrap_or(defaults.filename_prefix),
            window_days: self.window_days.unwrap_or(defaults.window_days),
        }
    }
}
