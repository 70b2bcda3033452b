//! Severity levels for scored readings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of an anomaly, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Normal,
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Normal => "Normal",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Normal < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Normal.to_string(), "Normal");
        assert_eq!(Severity::Info.to_string(), "Info");
        assert_eq!(Severity::Warning.to_string(), "Warning");
        assert_eq!(Severity::Critical.to_string(), "Critical");
    }
}
