//! Count-vector construction and cosine scoring.

use std::collections::HashMap;

use tracing::trace;

use crate::config::ScoreConfig;

/// Per-feature counts for the document pair: `[count_a, count_b]`.
type PairCounts = HashMap<String, [u64; 2]>;

fn accumulate<T: AsRef<str>>(tokens: &[T], slot: usize, bigrams: bool, counts: &mut PairCounts) {
    for token in tokens {
        counts.entry(token.as_ref().to_string()).or_default()[slot] += 1;
    }
    if bigrams {
        for pair in tokens.windows(2) {
            let feature = format!("{} {}", pair[0].as_ref(), pair[1].as_ref());
            counts.entry(feature).or_default()[slot] += 1;
        }
    }
}

/// Applies the vocabulary bound: keep the `max_features` features with the
/// highest total count across both documents, ties broken by feature
/// string ascending. The retained set is the same for both vectors.
fn bound_vocabulary(counts: PairCounts, max_features: usize) -> Vec<[u64; 2]> {
    let mut features: Vec<(String, [u64; 2])> = counts.into_iter().collect();
    if features.len() > max_features {
        features.sort_unstable_by(|(fa, ca), (fb, cb)| {
            let total_a = ca[0] + ca[1];
            let total_b = cb[0] + cb[1];
            total_b.cmp(&total_a).then_with(|| fa.cmp(fb))
        });
        features.truncate(max_features);
    }
    features.into_iter().map(|(_, pair)| pair).collect()
}

/// Cosine similarity between two token sequences over their joint
/// unigram+bigram vocabulary.
///
/// Raw counts only; no IDF, no vector normalization. Returns NaN when
/// either document contributes no retained features (zero vector).
pub fn score_tokens<A, B>(tokens_a: &[A], tokens_b: &[B], cfg: &ScoreConfig) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut counts = PairCounts::new();
    accumulate(tokens_a, 0, cfg.bigrams, &mut counts);
    accumulate(tokens_b, 1, cfg.bigrams, &mut counts);

    let vocabulary_size = counts.len();
    let retained = bound_vocabulary(counts, cfg.max_features.max(1));
    trace!(
        vocabulary_size,
        retained = retained.len(),
        "built pair feature vectors"
    );

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for [a, b] in retained {
        let (a, b) = (a as f64, b as f64);
        dot += a * b;
        norm_a += a * a;
        norm_b += b * b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        // Zero magnitude: the angle is undefined. Propagated as NaN, not
        // coerced to 0.
        return f64::NAN;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Scores two documents in the normalizer's joined output format
/// (tokens separated by single spaces).
///
/// Splitting on the space separator reproduces exactly the token
/// sequences the normalizer emitted; no further normalization happens
/// here.
pub fn score_joined(doc_a: &str, doc_b: &str, cfg: &ScoreConfig) -> f64 {
    let tokens_a: Vec<&str> = doc_a.split(' ').filter(|t| !t.is_empty()).collect();
    let tokens_b: Vec<&str> = doc_b.split(' ').filter(|t| !t.is_empty()).collect();
    score_tokens(&tokens_a, &tokens_b, cfg)
}
