//! 单个文件处理器
//!
//! 读取 → 解析 → 提取 → 写入（有题目时）

use crate::config::Config;
use crate::models::loaders::{load_html_document, output_path_for};
use crate::services::{OutputWriter, QuestionExtractor};
use anyhow::Result;
use scraper::Html;
use std::path::{Path, PathBuf};

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// 已生成输出文件
    Written { output: PathBuf, count: usize },
    /// 未提取到任何题目，没有创建输出文件
    NoQuestions,
}

/// 处理单个 HTML 文件
///
/// # 参数
/// - `extractor`: 题目提取服务
/// - `writer`: 输出写入服务
/// - `input`: 输入文件路径
/// - `config`: 配置
pub async fn process_file(
    extractor: &QuestionExtractor,
    writer: &OutputWriter,
    input: &Path,
    config: &Config,
) -> Result<FileOutcome> {
    let html = load_html_document(input).await?;

    // Html 不是 Send，提取完成后立即释放
    let records = {
        let document = Html::parse_document(&html);
        extractor.extract_formatted(&document, &config.answer_prefix)
    };

    if records.is_empty() {
        return Ok(FileOutcome::NoQuestions);
    }

    let output = output_path_for(input, &config.output_extension);
    writer.write(&output, &records).await?;

    Ok(FileOutcome::Written {
        output,
        count: records.len(),
    })
}
