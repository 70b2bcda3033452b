//! Recommended-action rules.

use scoring_spi::Severity;

/// Recommended operator action for a scored reading.
///
/// Keyed on severity and the value's position relative to the batch
/// mean; total over every severity level.
pub fn recommended_action(severity: Severity, value: f64, batch_mean: f64) -> &'static str {
    match severity {
        Severity::Critical => {
            if value < batch_mean * 0.5 {
                "Immediate equipment inspection required"
            } else {
                "Check for external factors affecting output"
            }
        }
        Severity::Warning => "Monitor closely and schedule maintenance check",
        Severity::Info => "Note for pattern analysis",
        Severity::Normal => "No action required",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_low_output() {
        let action = recommended_action(Severity::Critical, 100.0, 500.0);
        assert_eq!(action, "Immediate equipment inspection required");
    }

    #[test]
    fn test_critical_other() {
        let action = recommended_action(Severity::Critical, 900.0, 500.0);
        assert_eq!(action, "Check for external factors affecting output");
    }

    #[test]
    fn test_remaining_levels() {
        assert_eq!(
            recommended_action(Severity::Warning, 400.0, 500.0),
            "Monitor closely and schedule maintenance check"
        );
        assert_eq!(
            recommended_action(Severity::Info, 450.0, 500.0),
            "Note for pattern analysis"
        );
        assert_eq!(
            recommended_action(Severity::Normal, 500.0, 500.0),
            "No action required"
        );
    }
}
