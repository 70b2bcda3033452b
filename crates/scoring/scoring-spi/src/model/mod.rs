mod feature_matrix;
mod reading;
mod scored_reading;
mod severity;
mod summary;

pub use feature_matrix::FeatureMatrix;
pub use reading::Reading;
pub use scored_reading::ScoredReading;
pub use severity::Severity;
pub use summary::DetectionSummary;
