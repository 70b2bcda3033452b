//! # gridpulse-alert
//!
//! Daily alert derivation and batch export for scored energy readings.
//!
//! This facade provides a single entry point to the alert module:
//! - Alert, summary, and batch result models plus errors from SPI
//! - Exporter configuration and builder from API
//! - Alert derivation, daily summaries, and the `AlertExporter` from
//!   Core

// Re-export everything from SPI
pub use alert_spi::*;

// Re-export everything from API
pub use alert_api::*;

// Re-export everything from Core
pub use alert_core::*;
