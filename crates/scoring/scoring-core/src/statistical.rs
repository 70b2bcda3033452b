//! Batch-relative statistical scorers.

use crate::stats::{mean, population_std, sample_std};

/// Absolute z-scores against the batch mean.
///
/// A zero-variance batch yields all zeros: nothing deviates, nothing
/// is signalled, and no error is raised.
pub fn z_scores(values: &[f64]) -> Vec<f64> {
    let m = mean(values);
    let std = population_std(values);
    if std == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - m).abs() / std).collect()
}

/// Statistical process control scores against 3-sigma limits.
///
/// Scores measure how many standard deviations a value lies beyond
/// the batch control limits; values inside the limits score zero.
pub fn spc_scores(values: &[f64]) -> Vec<f64> {
    let m = mean(values);
    let std = sample_std(values);
    if std == 0.0 {
        return vec![0.0; values.len()];
    }
    let ucl = m + 3.0 * std;
    let lcl = m - 3.0 * std;
    values
        .iter()
        .map(|&v| (v - ucl).max(0.0) / std + (lcl - v).max(0.0) / std)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_scores_basic() {
        // mean 412.5, population std ~151.55
        let values = [500.0, 500.0, 500.0, 150.0];
        let scores = z_scores(&values);
        assert!((scores[0] - 0.577_35).abs() < 1e-3);
        assert!((scores[3] - 1.732_05).abs() < 1e-3);
    }

    #[test]
    fn test_z_scores_zero_variance() {
        let scores = z_scores(&[500.0, 500.0, 500.0]);
        assert_eq!(scores, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_spc_inside_limits_is_zero() {
        let values = [500.0, 500.0, 500.0, 150.0];
        // sample std 175, limits 412.5 +/- 525: everything inside
        let scores = spc_scores(&values);
        assert!(scores.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_spc_scores_excursion() {
        let mut values = vec![100.0; 20];
        values[0] = 101.0;
        values[1] = 99.0;
        values.push(200.0);
        let scores = spc_scores(&values);
        let std = {
            let m = values.iter().sum::<f64>() / values.len() as f64;
            (values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64)
                .sqrt()
        };
        let m = values.iter().sum::<f64>() / values.len() as f64;
        let expected = (200.0 - (m + 3.0 * std)).max(0.0) / std;
        assert!(expected > 0.0);
        assert!((scores[values.len() - 1] - expected).abs() < 1e-9);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_spc_zero_variance() {
        let scores = spc_scores(&[42.0, 42.0]);
        assert_eq!(scores, vec![0.0, 0.0]);
    }
}
