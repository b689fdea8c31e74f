//! papercheck scoring layer.
//!
//! Quantifies lexical overlap between two normalized token sequences.
//! Count vectors are built over unigrams and bigrams from a joint,
//! bounded vocabulary; the score is the cosine of the angle between
//! the raw count vectors.
//!
//! ## Weighting policy
//!
//! Raw term counts only: no IDF, and no L2 normalization of the count
//! vectors. Padding a candidate document with unrelated content lengthens
//! its vector but does not shrink the overlap term, so similarity is not
//! diluted by added bulk. The flip side is that similarity is not
//! scale-invariant: under a unigram-only configuration a document
//! repeated k times scores 1.0 against a single copy. With bigrams the
//! repetition seam introduces boundary features the single copy lacks,
//! so exact proportionality breaks and the score lands just below 1.
//!
//! ## Degenerate inputs
//!
//! A document that yields no retained features has a zero vector; the
//! cosine denominator is then zero and the score is NaN, returned to the
//! caller unchanged. NaN is a fact about the input, not an error.

mod config;
mod vectorizer;

pub use crate::config::{ScoreConfig, ScoreError};
pub use crate::vectorizer::{score_joined, score_tokens};
