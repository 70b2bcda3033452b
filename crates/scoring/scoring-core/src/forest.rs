//! Isolation forest outlier model.

use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use scoring_api::ForestConfig;
use scoring_spi::{FeatureMatrix, OutlierModel, Result, ScoringError};

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

enum Node {
    Leaf {
        size: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Isolation forest fitted on scaled feature vectors.
///
/// Fitting returns an immutable snapshot; scoring never mutates it,
/// so one fitted forest may serve concurrent score calls. Points that
/// isolate in fewer random splits receive lower decision scores.
pub struct IsolationForest {
    trees: Vec<Node>,
    sample_size: usize,
    n_features: usize,
    threshold: f64,
}

impl IsolationForest {
    /// Fit a forest on training features with a seeded sampler.
    pub fn fit(features: &FeatureMatrix, config: &ForestConfig) -> Result<Self> {
        config.validate()?;

        let n = features.n_rows();
        let sample_size = config.sample_size.min(n);
        let max_depth = config
            .max_depth
            .unwrap_or_else(|| (sample_size as f64).log2().ceil() as usize)
            .max(1);

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut trees = Vec::with_capacity(config.n_trees);
        for _ in 0..config.n_trees {
            let indices = sample(&mut rng, n, sample_size).into_vec();
            trees.push(build_tree(features, &indices, 0, max_depth, &mut rng));
        }

        let mut forest = Self {
            trees,
            sample_size,
            n_features: features.n_cols(),
            threshold: 0.0,
        };

        // Calibrate the outlier threshold as the contamination
        // quantile of the training decision scores.
        let mut train_scores = forest.score(features)?;
        train_scores.sort_by(|a, b| a.total_cmp(b));
        let k = ((n as f64 * config.contamination).ceil() as usize).clamp(1, n) - 1;
        forest.threshold = train_scores[k];

        Ok(forest)
    }

    /// Decision-score threshold implied by the contamination fraction.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a decision score falls below the contamination threshold.
    pub fn is_outlier(&self, score: f64) -> bool {
        score < self.threshold
    }
}

impl OutlierModel for IsolationForest {
    fn score(&self, features: &FeatureMatrix) -> Result<Vec<f64>> {
        if features.n_cols() != self.n_features {
            return Err(ScoringError::FeatureMismatch {
                expected: self.n_features,
                got: features.n_cols(),
            });
        }

        let denom = average_path_length(self.sample_size).max(1.0);
        let scores = features
            .rows()
            .map(|row| {
                let total: f64 = self
                    .trees
                    .iter()
                    .map(|tree| path_length(tree, row, 0.0))
                    .sum();
                let mean_path = total / self.trees.len() as f64;
                let anomaly = 2.0_f64.powf(-mean_path / denom);
                0.5 - anomaly
            })
            .collect();
        Ok(scores)
    }

    fn n_features(&self) -> usize {
        self.n_features
    }
}

fn build_tree(
    features: &FeatureMatrix,
    indices: &[usize],
    depth: usize,
    max_depth: usize,
    rng: &mut ChaCha8Rng,
) -> Node {
    if indices.len() <= 1 || depth >= max_depth {
        return Node::Leaf {
            size: indices.len(),
        };
    }

    // Only columns with spread among the sampled rows can split them.
    let mut candidates = Vec::new();
    for j in 0..features.n_cols() {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &i in indices {
            let v = features.row(i)[j];
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if hi > lo {
            candidates.push((j, lo, hi));
        }
    }
    if candidates.is_empty() {
        return Node::Leaf {
            size: indices.len(),
        };
    }

    let (feature, lo, hi) = candidates[rng.gen_range(0..candidates.len())];
    let threshold = rng.gen_range(lo..hi);
    let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| features.row(i)[feature] < threshold);

    Node::Split {
        feature,
        threshold,
        left: Box::new(build_tree(features, &left_idx, depth + 1, max_depth, rng)),
        right: Box::new(build_tree(features, &right_idx, depth + 1, max_depth, rng)),
    }
}

fn path_length(node: &Node, row: &[f64], depth: f64) -> f64 {
    match node {
        Node::Leaf { size } => depth + average_path_length(*size),
        Node::Split {
            feature,
            threshold,
            left,
            right,
        } => {
            if row[*feature] < *threshold {
                path_length(left, row, depth + 1.0)
            } else {
                path_length(right, row, depth + 1.0)
            }
        }
    }
}

/// Expected path length of an unsuccessful BST search among n points.
fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let nf = n as f64;
            2.0 * ((nf - 1.0).ln() + EULER_GAMMA) - 2.0 * (nf - 1.0) / nf
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_with_outlier() -> FeatureMatrix {
        let mut values: Vec<f64> = (0..40).map(|i| 500.0 + (i % 5) as f64).collect();
        values.push(150.0);
        let diffs: Vec<f64> = values.iter().map(|v| v - 500.0).collect();
        FeatureMatrix::from_columns(vec![values, diffs]).unwrap()
    }

    #[test]
    fn test_outlier_scores_lowest() {
        let features = matrix_with_outlier();
        let forest = IsolationForest::fit(&features, &ForestConfig::default()).unwrap();
        let scores = forest.score(&features).unwrap();

        let min_idx = scores
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .unwrap()
            .0;
        assert_eq!(min_idx, 40);
    }

    #[test]
    fn test_fit_is_deterministic_for_seed() {
        let features = matrix_with_outlier();
        let config = ForestConfig::default();
        let a = IsolationForest::fit(&features, &config).unwrap();
        let b = IsolationForest::fit(&features, &config).unwrap();
        assert_eq!(a.score(&features).unwrap(), b.score(&features).unwrap());
    }

    #[test]
    fn test_different_seeds_differ() {
        let features = matrix_with_outlier();
        let a = IsolationForest::fit(&features, &ForestConfig::new(0.1, 42)).unwrap();
        let b = IsolationForest::fit(&features, &ForestConfig::new(0.1, 7)).unwrap();
        assert_ne!(a.score(&features).unwrap(), b.score(&features).unwrap());
    }

    #[test]
    fn test_score_rejects_wrong_width() {
        let features = matrix_with_outlier();
        let forest = IsolationForest::fit(&features, &ForestConfig::default()).unwrap();
        let narrow = FeatureMatrix::from_columns(vec![vec![1.0, 2.0]]).unwrap();
        assert!(matches!(
            forest.score(&narrow).unwrap_err(),
            ScoringError::FeatureMismatch { expected: 2, got: 1 }
        ));
    }

    #[test]
    fn test_contamination_threshold_flags_outlier() {
        let features = matrix_with_outlier();
        let forest = IsolationForest::fit(&features, &ForestConfig::default()).unwrap();
        let scores = forest.score(&features).unwrap();
        assert!(forest.is_outlier(scores[40]));
        // The exact center of the inlier cluster stays inside.
        assert!(!forest.is_outlier(scores[2]));
    }

    #[test]
    fn test_average_path_length_values() {
        assert_eq!(average_path_length(0), 0.0);
        assert_eq!(average_path_length(1), 0.0);
        assert_eq!(average_path_length(2), 1.0);
        assert!(average_path_length(256) > average_path_length(16));
    }

    #[test]
    fn test_constant_matrix_degenerates_gracefully() {
        let features = FeatureMatrix::from_columns(vec![vec![5.0; 12]]).unwrap();
        let forest = IsolationForest::fit(&features, &ForestConfig::default()).unwrap();
        let scores = forest.score(&features).unwrap();
        // Every point is identical, so every score is identical.
        assert!(scores.windows(2).all(|w| w[0] == w[1]));
    }
}
