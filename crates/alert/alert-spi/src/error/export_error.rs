//! Alert export error types.

use thiserror::Error;

/// Alert export errors.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Writing the alert CSV failed
    #[error("CSV write error: {0}")]
    Csv(String),

    /// Serializing the daily summary failed
    #[error("Summary serialization error: {0}")]
    Json(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_display() {
        let error = ExportError::Io("permission denied".to_string());
        assert_eq!(error.to_string(), "I/O error: permission denied");
    }

    #[test]
    fn test_csv_display() {
        let error = ExportError::Csv("invalid record".to_string());
        assert_eq!(error.to_string(), "CSV write error: invalid record");
    }

    #[test]
    fn test_json_display() {
        let error = ExportError::Json("unexpected value".to_string());
        assert_eq!(
            error.to_string(),
            "Summary serialization error: unexpected value"
        );
    }

    #[test]
    fn test_error_is_debug_and_clone() {
        let error = ExportError::Io("disk full".to_string());
        let copied = error.clone();
        assert!(format!("{:?}", copied).contains("Io"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(ExportError::Io("test".to_string()));
        assert_eq!(error.to_string(), "I/O error: test");
    }
}
