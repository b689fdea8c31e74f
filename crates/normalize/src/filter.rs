//! Character-class filtering for raw document text.
//!
//! The filter is the first pipeline step and deliberately character-based,
//! not semantic: Latin letters, digits, and most symbols are deleted
//! outright rather than replaced with a space, so two Chinese spans that
//! were separated only by a removed character end up fused before
//! segmentation.

/// Chinese punctuation marks that survive filtering. Everything else that
/// is not a CJK ideograph or whitespace is deleted.
const KEPT_PUNCTUATION: [char; 7] = ['，', '。', '！', '？', '；', '：', '、'];

/// CJK Unified Ideographs, the U+4E00..=U+9FA5 block.
fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

pub(crate) fn is_kept_char(c: char) -> bool {
    is_cjk_ideograph(c) || c.is_whitespace() || KEPT_PUNCTUATION.contains(&c)
}

/// Removes every character that is not a CJK ideograph, an approved
/// Chinese punctuation mark, or whitespace.
///
/// Deterministic and allocation-bounded: the output is never longer than
/// the input.
pub fn filter_chars(text: &str) -> String {
    let mut filtered = String::with_capacity(text.len());
    filtered.extend(text.chars().filter(|c| is_kept_char(*c)));
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_cjk_and_chinese_punctuation() {
        assert_eq!(filter_chars("机器学习，需要数据。"), "机器学习，需要数据。");
    }

    #[test]
    fn deletes_latin_digits_and_symbols() {
        assert_eq!(filter_chars("Hello世界123!@#"), "世界");
    }

    #[test]
    fn removed_characters_fuse_adjacent_spans() {
        // "A" separates the two spans; deleting it (not spacing it) fuses them.
        assert_eq!(filter_chars("机器A学习"), "机器学习");
    }

    #[test]
    fn whitespace_is_preserved() {
        assert_eq!(filter_chars("机器 学习\n数据"), "机器 学习\n数据");
    }

    #[test]
    fn full_width_question_mark_is_kept() {
        assert_eq!(filter_chars("可以吗？真的?"), "可以吗？真的");
    }

    #[test]
    fn empty_input_is_identity() {
        assert_eq!(filter_chars(""), "");
    }
}
