//! The preprocess pipeline: filter, segment, canonicalize, drop stopwords.

use tracing::debug;

use crate::filter::filter_chars;
use crate::segment::{JiebaSegmenter, Segmenter};
use crate::stopwords::StopwordSet;
use crate::synonyms::SynonymTable;

/// Converts one raw document into a cleaned, ordered token sequence.
///
/// All three collaborators are immutable after construction; a caller
/// needing a different table or stopword set builds a new `Normalizer`.
#[derive(Debug, Clone)]
pub struct Normalizer<S: Segmenter = JiebaSegmenter> {
    stopwords: StopwordSet,
    synonyms: SynonymTable,
    segmenter: S,
}

impl Normalizer<JiebaSegmenter> {
    /// A normalizer using the default jieba segmenter.
    pub fn new(stopwords: StopwordSet, synonyms: SynonymTable) -> Self {
        Self::with_segmenter(stopwords, synonyms, JiebaSegmenter)
    }
}

impl<S: Segmenter> Normalizer<S> {
    /// A normalizer over an explicit segmenter implementation.
    pub fn with_segmenter(stopwords: StopwordSet, synonyms: SynonymTable, segmenter: S) -> Self {
        Self {
            stopwords,
            synonyms,
            segmenter,
        }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Runs the pipeline in its fixed order and returns the surviving
    /// tokens in original relative order.
    ///
    /// Empty input, or input whose every character is filtered or
    /// stopworded away, yields an empty sequence.
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        let filtered = filter_chars(text);

        let mut tokens = Vec::new();
        for word in self.segmenter.segment(&filtered) {
            // Canonicalization first, then the stopword test: a rule may
            // map a token onto (or away from) a stopword.
            let canonical = self.synonyms.canonical(&word);
            let canonical = canonical.trim();
            if canonical.is_empty() || self.stopwords.contains(canonical) {
                continue;
            }
            tokens.push(canonical.to_string());
        }

        debug!(token_count = tokens.len(), tokens = ?tokens, "preprocessed document");
        tokens
    }

    /// The external output contract: surviving tokens joined by exactly
    /// one space, `""` for empty or fully-filtered input.
    pub fn preprocess_joined(&self, text: &str) -> String {
        self.preprocess(text).join(" ")
    }
}
