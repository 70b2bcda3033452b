//! Anomaly Scoring Core
//!
//! Implementations of the scoring pipeline: feature extraction,
//! standard scaling, the isolation forest outlier model, statistical
//! scorers, score fusion, severity classification, recommendations,
//! and the ensemble detector orchestrating them.

mod combine;
mod detector;
mod features;
mod forest;
mod recommend;
mod scale;
mod severity;
mod statistical;
mod stats;

pub use combine::combine_scores;
pub use detector::{score_readings, EnsembleDetector};
pub use features::FeatureExtractor;
pub use forest::IsolationForest;
pub use recommend::recommended_action;
pub use scale::StandardScaler;
pub use severity::classify_severity;
pub use statistical::{spc_scores, z_scores};
