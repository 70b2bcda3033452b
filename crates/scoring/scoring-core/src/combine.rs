//! Score normalization and weighted fusion.

use scoring_api::ScoreWeights;

use crate::stats::EPSILON;

/// Fuse the three raw signals into one bounded anomaly score per point.
///
/// Isolation decision scores are min-max rescaled over the batch and
/// inverted so higher means more anomalous; z-scores saturate at 4
/// sigma, SPC scores at 3 sigma. The result is the fixed convex
/// combination of the normalized components.
pub fn combine_scores(
    isolation: &[f64],
    z: &[f64],
    spc: &[f64],
    weights: &ScoreWeights,
) -> Vec<f64> {
    let iso_min = isolation.iter().copied().fold(f64::INFINITY, f64::min);
    let iso_max = isolation.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let iso_range = iso_max - iso_min + EPSILON;

    isolation
        .iter()
        .zip(z.iter())
        .zip(spc.iter())
        .map(|((&iso, &z), &spc)| {
            let iso_norm = 1.0 - (iso - iso_min) / iso_range;
            let z_norm = (z / 4.0).clamp(0.0, 1.0);
            let spc_norm = (spc / 3.0).clamp(0.0, 1.0);
            weights.isolation * iso_norm + weights.z * z_norm + weights.spc * spc_norm
        })
        .collect()
}
