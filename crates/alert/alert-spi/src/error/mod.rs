mod export_error;

pub use export_error::{ExportError, Result};
