//! Word-level segmentation behind a pluggable interface.
//!
//! Segmentation is a capability, not a hard dependency on one library:
//! any implementation is acceptable as long as it is a lossless partition
//! (concatenating the tokens reproduces the input) and deterministic for a
//! fixed dictionary or model.

use std::sync::OnceLock;

use jieba_rs::Jieba;

/// A deterministic word segmenter.
///
/// Contract: `segment(text).concat() == text` for every input, and the
/// same input always yields the same tokens for a given implementation.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Process-wide jieba instance; the bundled dictionary is large enough
/// that building it once and sharing it is worth the global.
fn jieba() -> &'static Jieba {
    static JIEBA: OnceLock<Jieba> = OnceLock::new();
    JIEBA.get_or_init(Jieba::new)
}

/// Dictionary-plus-HMM Chinese segmentation in jieba's accurate mode.
///
/// Maximal-probability dictionary paths with a statistical (HMM) fallback
/// for sequences the dictionary does not cover.
#[derive(Debug, Default, Clone, Copy)]
pub struct JiebaSegmenter;

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        jieba()
            .cut(text, true)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segmentation_is_a_lossless_partition() {
        let segmenter = JiebaSegmenter;
        for text in [
            "机器学习需要大量数据训练模型",
            "深度学习依赖神经网络结构",
            "大数据分析大数据分析",
            "这是，带标点。的文本！",
            "",
        ] {
            let tokens = segmenter.segment(text);
            assert_eq!(tokens.concat(), text);
        }
    }

    #[test]
    fn segmentation_is_deterministic() {
        let segmenter = JiebaSegmenter;
        let text = "机器学习需要数据";
        assert_eq!(segmenter.segment(text), segmenter.segment(text));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(JiebaSegmenter.segment("").is_empty());
    }

    #[test]
    fn known_dictionary_words_stay_whole() {
        let tokens = JiebaSegmenter.segment("机器学习需要数据");
        assert!(tokens.iter().any(|t| t == "机器学习" || t == "机器"));
        assert!(tokens.iter().any(|t| t == "数据"));
    }
}
