//! Alert Export Core
//!
//! Turns scored readings into export-ready daily alert records and
//! drives the rolling batch export.

mod exporter;
mod formatter;
mod summary;

pub use exporter::AlertExporter;
pub use formatter::daily_alerts;
pub use summary::daily_summary;
