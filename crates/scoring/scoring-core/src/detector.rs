//! Ensemble detector orchestrating the scoring pipeline.

use scoring_api::DetectorConfig;
use scoring_spi::{
    DetectionSummary, OutlierModel, Reading, Result, ScoredReading, ScoringError,
};
use tracing::debug;

use crate::combine::combine_scores;
use crate::features::FeatureExtractor;
use crate::forest::IsolationForest;
use crate::recommend::recommended_action;
use crate::scale::StandardScaler;
use crate::severity::classify_severity;
use crate::statistical::{spc_scores, z_scores};
use crate::stats::mean;

/// Immutable state produced by a fit, shared by all detect calls.
struct FittedState {
    scaler: StandardScaler,
    model: Box<dyn OutlierModel>,
}

/// Multi-signal anomaly detector for energy-output readings.
///
/// Two-phase contract: `fit` trains the scaler and outlier model on a
/// historical batch; `detect` scores a batch against that frozen
/// state. Detecting before fitting fails with
/// [`ScoringError::NotFitted`]. Detection takes `&self` and never
/// mutates fitted state, so one fitted detector can serve concurrent
/// detect calls; refitting requires exclusive access.
pub struct EnsembleDetector {
    config: DetectorConfig,
    fitted: Option<FittedState>,
}

impl EnsembleDetector {
    /// Create an unfitted detector.
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    /// The detector configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Whether `fit` has completed.
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Fit the feature scaler and outlier model on a training batch.
    ///
    /// Replaces any previous fitted state with a new immutable
    /// snapshot.
    pub fn fit(&mut self, readings: &[Reading]) -> Result<()> {
        self.config.validate()?;

        let extractor = FeatureExtractor::new(self.config.rolling_window);
        let features = extractor.extract(readings)?;
        debug!(
            rows = features.n_rows(),
            cols = features.n_cols(),
            "fitting ensemble detector"
        );

        let scaler = StandardScaler::fit(&features);
        let scaled = scaler.transform(&features);
        let model = IsolationForest::fit(&scaled, &self.config.forest)?;

        self.fitted = Some(FittedState {
            scaler,
            model: Box::new(model),
        });
        Ok(())
    }

    /// Score a batch, returning one augmented reading per input.
    pub fn detect(&self, readings: &[Reading]) -> Result<Vec<ScoredReading>> {
        let fitted = self.fitted.as_ref().ok_or(ScoringError::NotFitted)?;
        if readings.is_empty() {
            return Err(ScoringError::EmptyBatch);
        }

        let extractor = FeatureExtractor::new(self.config.rolling_window);
        let features = extractor.extract(readings)?;
        if features.n_cols() != fitted.scaler.n_features() {
            return Err(ScoringError::FeatureMismatch {
                expected: fitted.scaler.n_features(),
                got: features.n_cols(),
            });
        }

        let scaled = fitted.scaler.transform(&features);
        let isolation = fitted.model.score(&scaled)?;

        let values: Vec<f64> = readings.iter().map(|r| r.value).collect();
        let z = z_scores(&values);
        let spc = spc_scores(&values);
        let combined = combine_scores(&isolation, &z, &spc, &self.config.weights);
        let batch_mean = mean(&values);

        let scored = readings
            .iter()
            .enumerate()
            .map(|(i, reading)| {
                let severity = classify_severity(combined[i], &self.config.thresholds);
                ScoredReading {
                    reading: reading.clone(),
                    isolation_score: isolation[i],
                    z_score: z[i],
                    spc_score: spc[i],
                    anomaly_score: combined[i],
                    anomaly_flag: combined[i] > self.config.thresholds.info,
                    severity,
                    recommended_action: recommended_action(severity, reading.value, batch_mean)
                        .to_string(),
                }
            })
            .collect();
        Ok(scored)
    }
}

/// Fit on a batch and score the same batch in one call.
///
/// Convenience entry point for callers that train and score on the
/// same window of readings.
pub fn score_readings(
    readings: &[Reading],
    config: &DetectorConfig,
) -> Result<(Vec<ScoredReading>, DetectionSummary)> {
    let mut detector = EnsembleDetector::new(config.clone());
    detector.fit(readings)?;
    let scored = detector.detect(readings)?;
    let summary = DetectionSummary::from_scored(&scored);
    Ok((scored, summary))
}
