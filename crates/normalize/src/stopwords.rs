//! Stopword membership for the normalization pipeline.

use std::collections::HashSet;

/// Built-in stopword list: high-frequency function words plus the
/// punctuation marks the character filter admits. The ASCII `?` entry is
/// intentional; the full-width `？` is not a stopword and can survive as a
/// token when the segmenter isolates it.
const BUILTIN: &[&str] = &[
    "是", "的", "了", "在", "和", "要", "我", "这", "那", "就", "也", "不", "，", "。", "！", "?",
    "、", "；", "：", "“", "”", "（", "）", "【", "】",
];

/// An immutable set of tokens excluded from scoring.
///
/// Membership tests are O(1) amortized and the set never mutates after
/// construction; callers wanting a different set build a new instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// An empty set; nothing is filtered.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Builds a set from arbitrary words (tests and custom deployments).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    /// The built-in list used by the checker.
    fn default() -> Self {
        Self::from_words(BUILTIN.iter().copied())
    }
}
