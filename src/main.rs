//! papercheck CLI — 中文论文查重.
//!
//! Reads the original and candidate documents, runs the normalization and
//! scoring pipeline once, and writes the single-line report to the output
//! path. Missing input files and unwritable output locations are fatal:
//! diagnostic on stderr, non-zero exit.

use std::fs;
use std::path::PathBuf;

use anyhow::{ensure, Context};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use papercheck::{format_report, Checker};

#[derive(Debug, Parser)]
#[command(name = "papercheck", version, about = "中文论文查重系统")]
struct Cli {
    /// 论文原文路径
    orig_path: PathBuf,
    /// 抄袭版论文路径
    candidate_path: PathBuf,
    /// 输出答案文件路径
    output_path: PathBuf,
    /// 同义词表路径（缺省时尝试当前目录下的 synonyms.txt）
    #[arg(short, long)]
    synonyms: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    ensure!(
        cli.orig_path.is_file(),
        "原文文件不存在：{}",
        cli.orig_path.display()
    );
    ensure!(
        cli.candidate_path.is_file(),
        "抄袭版文件不存在：{}",
        cli.candidate_path.display()
    );

    // No explicit table: pick up ./synonyms.txt when present.
    let synonyms = cli.synonyms.or_else(|| {
        let default = PathBuf::from("synonyms.txt");
        default.is_file().then_some(default)
    });
    let checker = Checker::new(synonyms.as_deref());

    let original = fs::read_to_string(&cli.orig_path)
        .with_context(|| format!("无法读取原文：{}", cli.orig_path.display()))?;
    let candidate = fs::read_to_string(&cli.candidate_path)
        .with_context(|| format!("无法读取抄袭版：{}", cli.candidate_path.display()))?;

    let similarity = checker.similarity(&original, &candidate);
    if similarity.is_nan() {
        warn!("one of the documents normalized to nothing; reporting 0.00%");
    }

    if let Some(parent) = cli.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建输出目录：{}", parent.display()))?;
        }
    }

    let report = format_report(similarity);
    fs::write(&cli.output_path, &report)
        .with_context(|| format!("无法写入结果文件：{}", cli.output_path.display()))?;
    info!(output = %cli.output_path.display(), report = %report, "结果已保存");

    Ok(())
}
