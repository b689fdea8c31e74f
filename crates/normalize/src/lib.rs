//! papercheck normalization layer.
//!
//! This crate turns one raw Chinese document into a cleaned, ordered token
//! sequence. The similarity scorer can rely on this for a stable input
//! contract.
//!
//! ## What we do
//!
//! - Character filtering (keep CJK ideographs, a small set of Chinese
//!   punctuation marks, and whitespace; delete everything else)
//! - Word-level segmentation via a pluggable [`Segmenter`] (jieba by default)
//! - Synonym canonicalization with identity fallback
//! - Stopword and empty-token filtering, order preserved
//!
//! ## Pure function guarantee
//!
//! Aside from an optional `tracing` event, [`Normalizer::preprocess`] is a
//! pure function of the input text plus the immutable [`StopwordSet`] and
//! [`SynonymTable`] built at construction. Same input, same table, same
//! segmenter dictionary: same output on any machine.
//!
//! ## Invariants worth knowing
//!
//! - Step order is fixed: filter, segment, canonicalize, drop stopwords.
//!   Reordering changes results.
//! - Segmentation is a lossless partition of the filtered text.
//! - Empty input (or input filtered down to nothing) yields an empty
//!   sequence, never an error.

mod filter;
mod pipeline;
mod segment;
mod stopwords;
mod synonyms;

pub use crate::filter::filter_chars;
pub use crate::pipeline::Normalizer;
pub use crate::segment::{JiebaSegmenter, Segmenter};
pub use crate::stopwords::StopwordSet;
pub use crate::synonyms::{load_synonyms, SynonymLoad, SynonymLoadWarning, SynonymTable};
