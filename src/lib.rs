//! Umbrella crate for papercheck.
//!
//! Stitches the normalization layer and the scoring layer together so
//! callers can compare a document pair with a single API entry point:
//! raw text → token sequence (twice) → cosine similarity → report line.
//!
//! The heavy lifting lives in the stage crates, re-exported here:
//! `normalize` (character filter, segmentation, synonym canonicalization,
//! stopword removal) and `score` (unigram+bigram count vectors, bounded
//! vocabulary, raw-count cosine).

pub use normalize::{
    filter_chars, load_synonyms, JiebaSegmenter, Normalizer, Segmenter, StopwordSet, SynonymLoad,
    SynonymLoadWarning, SynonymTable,
};
pub use score::{score_joined, score_tokens, ScoreConfig, ScoreError};

use std::path::Path;

use tracing::warn;

/// One-stop checker: holds the immutable normalizer and score
/// configuration, compares document pairs.
///
/// Construction is the only place state is decided; a caller needing a
/// different synonym table or stopword set builds a new `Checker`.
#[derive(Debug, Clone)]
pub struct Checker {
    normalizer: Normalizer,
    score_cfg: ScoreConfig,
}

impl Checker {
    /// Builds a checker, loading the synonym table from `synonyms_path`
    /// when given. A missing or unreadable resource degrades to an empty
    /// table with a logged warning; it never fails construction.
    pub fn new(synonyms_path: Option<&Path>) -> Self {
        let table = match synonyms_path {
            Some(path) => {
                let load = load_synonyms(path);
                if let Some(warning) = &load.warning {
                    warn!(warning = %warning, "continuing with empty synonym table");
                }
                load.table
            }
            None => SynonymTable::default(),
        };
        Self::with_table(table)
    }

    /// Builds a checker around an explicit synonym table.
    pub fn with_table(table: SynonymTable) -> Self {
        Self {
            normalizer: Normalizer::new(StopwordSet::default(), table),
            score_cfg: ScoreConfig::default(),
        }
    }

    /// Fully explicit construction; validates the score configuration.
    pub fn with_parts(
        stopwords: StopwordSet,
        table: SynonymTable,
        score_cfg: ScoreConfig,
    ) -> Result<Self, ScoreError> {
        score_cfg.validate()?;
        Ok(Self {
            normalizer: Normalizer::new(stopwords, table),
            score_cfg,
        })
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// The normalizer output contract: surviving tokens joined by single
    /// spaces.
    pub fn preprocess(&self, text: &str) -> String {
        self.normalizer.preprocess_joined(text)
    }

    /// Normalizes both documents and scores the pair once.
    ///
    /// Returns a value in [0,1], or NaN when either document normalizes
    /// to nothing.
    pub fn similarity(&self, original: &str, candidate: &str) -> f64 {
        let tokens_a = self.normalizer.preprocess(original);
        let tokens_b = self.normalizer.preprocess(candidate);
        score_tokens(&tokens_a, &tokens_b, &self.score_cfg)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::with_table(SynonymTable::default())
    }
}

/// Formats the similarity as the single-line report written to the output
/// file, percentage to two decimals.
///
/// NaN (either document empty after normalization) is presented as 0.00 —
/// the report promises a percentage, and an undefined angle carries no
/// evidence of overlap.
pub fn format_report(similarity: f64) -> String {
    let fraction = if similarity.is_nan() { 0.0 } else { similarity };
    format!("论文查重率：{:.2}%", fraction * 100.0)
}
