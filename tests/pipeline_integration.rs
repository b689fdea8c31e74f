//! End-to-end pipeline tests: raw text pairs through the full
//! normalize-then-score path.

use papercheck::{format_report, Checker, StopwordSet, SynonymTable};

#[test]
fn identical_documents_report_100() {
    let checker = Checker::default();
    let text = "机器学习需要数据";
    let similarity = checker.similarity(text, text);
    assert_eq!(format_report(similarity), "论文查重率：100.00%");
}

#[test]
fn unrelated_documents_report_below_20() {
    let checker = Checker::default();
    let similarity = checker.similarity("深度学习依赖神经网络结构", "数据库管理需要SQL语言技能");
    assert!(!similarity.is_nan());
    assert!(similarity < 0.2, "got {similarity}");
}

#[test]
fn synonym_table_raises_aligned_similarity() {
    let original = "周天学习ML课程";
    let paraphrased = "星期天研究机器学习教程";

    let without_table = Checker::default().similarity(original, paraphrased);
    let with_table = Checker::with_table(SynonymTable::from_pairs([
        ("周天", "星期天"),
        ("ML", "机器学习"),
    ]))
    .similarity(original, paraphrased);

    assert!(
        with_table > without_table,
        "with={with_table} without={without_table}"
    );
}

#[test]
fn preprocess_output_is_clean() {
    let checker = Checker::default();
    let joined = checker.preprocess("Hello! 这是一个的测试文本，包含English words和数字123！");

    // No Latin letters or digits survive the character filter.
    assert!(!joined.chars().any(|c| c.is_ascii_alphanumeric()));
    // Standalone stopwords are gone.
    for stop in ["是", "的", "了"] {
        assert!(
            !joined.split(' ').any(|t| t == stop),
            "{stop} must not survive"
        );
    }
}

#[test]
fn empty_and_degenerate_pairs_are_nan() {
    let checker = Checker::default();
    assert!(checker.similarity("", "").is_nan());
    assert!(checker.similarity("", "机器学习需要数据").is_nan());
    // Whole input erased by the character filter.
    assert!(checker.similarity("ABC 123 !!!", "机器学习").is_nan());
}

#[test]
fn empty_pair_reports_zero_percent() {
    let checker = Checker::default();
    let similarity = checker.similarity("", "");
    assert_eq!(format_report(similarity), "论文查重率：0.00%");
}

#[test]
fn custom_stopword_set_is_respected() {
    let checker = Checker::with_parts(
        StopwordSet::from_words(["数据"]),
        SynonymTable::default(),
        papercheck::ScoreConfig::default(),
    )
    .expect("valid config");
    let joined = checker.preprocess("机器学习需要数据");
    assert!(!joined.split(' ').any(|t| t == "数据"));
    assert!(joined.contains("学习") || joined.contains("机器"));
}

#[test]
fn added_padding_does_not_erase_overlap() {
    // The anti-dilution policy: shared content still registers when the
    // candidate carries a lot of unrelated bulk.
    let checker = Checker::default();
    let original = "机器学习需要大量数据训练模型";
    let padded = format!("{original}而且气候变化影响全球农业生产格局与粮食安全战略");
    let similarity = checker.similarity(original, &padded);
    assert!(similarity > 0.3, "got {similarity}");
    assert!(similarity < 1.0);
}
