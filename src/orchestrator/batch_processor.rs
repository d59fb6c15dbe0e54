use crate::config::Config;
use crate::models::loaders::find_html_files;
use crate::orchestrator::file_processor::{process_file, FileOutcome};
use crate::services::{OutputWriter, QuestionExtractor};
use crate::utils::logging::{log_files_found, log_startup, print_final_stats};
use anyhow::Result;
use std::path::Path;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    extractor: QuestionExtractor,
    writer: OutputWriter,
}

/// 处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total: usize,
    pub written: usize,
    pub empty: usize,
    pub failed: usize,
    pub questions: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config.input_dir);

        Ok(Self {
            config,
            extractor: QuestionExtractor::new()?,
            writer: OutputWriter::new(),
        })
    }

    /// 运行应用主逻辑
    ///
    /// 单个文件失败只记录日志，不中断后续文件。
    pub async fn run(&self) -> Result<ProcessingStats> {
        info!("\n📁 正在扫描待处理的 HTML 文件...");
        let files = find_html_files(&self.config.input_dir, &self.config.input_extension).await?;

        if files.is_empty() {
            warn!(
                "⚠️ 目录 {} 下未找到任何 {} 文件，程序结束",
                self.config.input_dir.display(),
                self.config.input_extension
            );
            return Ok(ProcessingStats::default());
        }

        log_files_found(files.len());

        let mut stats = ProcessingStats {
            total: files.len(),
            ..Default::default()
        };

        for (idx, file) in files.iter().enumerate() {
            let file_index = idx + 1;
            match process_file(&self.extractor, &self.writer, file, &self.config).await {
                Ok(FileOutcome::Written { output, count }) => {
                    info!(
                        "[文件 {}] ✓ 已生成 {} ({} 道题)",
                        file_index,
                        display_name(&output),
                        count
                    );
                    stats.written += 1;
                    stats.questions += count;
                }
                Ok(FileOutcome::NoQuestions) => {
                    warn!(
                        "[文件 {}] ⚠️ 未在 {} 中提取到任何题目 (no questions found)",
                        file_index,
                        display_name(file)
                    );
                    stats.empty += 1;
                }
                Err(e) => {
                    error!(
                        "[文件 {}] ❌ 处理 {} 时出错: {}",
                        file_index,
                        display_name(file),
                        e
                    );
                    stats.failed += 1;
                }
            }
        }

        print_final_stats(
            stats.written,
            stats.empty,
            stats.failed,
            stats.total,
            stats.questions,
        );

        Ok(stats)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
