//! Outlier model trait definition.

use crate::error::Result;
use crate::model::FeatureMatrix;

/// Capability interface for fitted unsupervised outlier models.
///
/// A fitted model is an immutable snapshot: scoring takes `&self` and
/// never mutates fitted state, so a single instance is safe to share
/// across concurrent scoring calls. Producing a new snapshot (fitting)
/// is a constructor concern of the concrete model type.
pub trait OutlierModel: Send + Sync {
    /// Compute one decision score per feature row.
    ///
    /// Lower values indicate more anomalous points, consistent with
    /// the decision-function convention.
    fn score(&self, features: &FeatureMatrix) -> Result<Vec<f64>>;

    /// Number of feature columns the model was fitted with.
    fn n_features(&self) -> usize;
}
