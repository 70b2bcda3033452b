mod scoring_error;

pub use scoring_error::{Result, ScoringError};
