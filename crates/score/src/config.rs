//! Configuration for the similarity scorer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors the scoring layer can produce. Scoring itself never fails on
/// well-typed input; only configuration validation does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Tuning knobs for feature-vector construction.
///
/// Cheap to clone and serde-friendly; immutable once handed to a checker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreConfig {
    /// Upper bound on the joint vocabulary. When the candidate feature set
    /// is larger, the top `max_features` by total count across both
    /// documents are retained (ties broken by feature string, ascending)
    /// and dropped from both vectors symmetrically.
    pub max_features: usize,
    /// Include bigram features (adjacent ordered token pairs) alongside
    /// unigrams.
    pub bigrams: bool,
}

impl ScoreConfig {
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.max_features == 0 {
            return Err(ScoreError::InvalidConfig(
                "max_features must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            max_features: 5000,
            bigrams: true,
        }
    }
}
