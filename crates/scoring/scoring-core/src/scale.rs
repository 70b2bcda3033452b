//! Per-column standard scaling.

use scoring_spi::FeatureMatrix;

use crate::stats::{mean, population_std, EPSILON};

/// Zero-mean, unit-variance scaler fitted per feature column.
///
/// Scaling parameters are frozen at fit time and reused unchanged for
/// every subsequent transform, so a scaler fitted alongside an outlier
/// model keeps both in the same feature space.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Fit column means and standard deviations.
    pub fn fit(features: &FeatureMatrix) -> Self {
        let mut means = Vec::with_capacity(features.n_cols());
        let mut stds = Vec::with_capacity(features.n_cols());
        for j in 0..features.n_cols() {
            let column = features.column(j);
            means.push(mean(&column));
            stds.push(population_std(&column));
        }
        Self { means, stds }
    }

    /// Number of feature columns the scaler was fitted with.
    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    /// Scale a matrix with the frozen fit parameters.
    ///
    /// Constant columns pass through centered only, never divided by
    /// their zero deviation.
    pub fn transform(&self, features: &FeatureMatrix) -> FeatureMatrix {
        features.map_cells(|_, j, v| {
            let std = self.stds[j];
            if std < EPSILON {
                v - self.means[j]
            } else {
                (v - self.means[j]) / std
            }
        })
    }
}
