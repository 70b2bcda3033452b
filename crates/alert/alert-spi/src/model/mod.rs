mod alert;
mod batch;
mod summary;

pub use alert::{Alert, TrendDirection};
pub use batch::{BatchResult, DailyExport, ExportStatus};
pub use summary::DailySummary;
