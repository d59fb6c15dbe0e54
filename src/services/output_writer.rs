//! 输出写入服务 - 业务能力层
//!
//! 只负责"写 txt 文件"能力，不关心题目从哪里来

use crate::error::{AppError, AppResult};
use std::path::Path;
use tracing::debug;

/// 输出写入服务
///
/// 每道题之后追加一个空行；总是覆盖已有文件。
#[derive(Debug, Default, Clone, Copy)]
pub struct OutputWriter;

impl OutputWriter {
    pub fn new() -> Self {
        Self
    }

    /// 拼接输出内容
    pub fn render(records: &[String]) -> String {
        let mut content = String::with_capacity(records.iter().map(|r| r.len() + 1).sum());
        for record in records {
            content.push_str(record);
            content.push('\n');
        }
        content
    }

    /// 写入文件
    ///
    /// # 参数
    /// - `path`: 输出文件路径
    /// - `records`: 已格式化的题目
    pub async fn write(&self, path: &Path, records: &[String]) -> AppResult<()> {
        let content = Self::render(records);
        debug!("写入 {} | {} 道题 | {} 字节", path.display(), records.len(), content.len());

        tokio::fs::write(path, content.as_bytes())
            .await
            .map_err(|e| AppError::write_failed(path, e))
    }
}
