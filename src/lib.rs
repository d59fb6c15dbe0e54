//! # Quiz Extract
//!
//! 从超星学习通导出的 HTML 页面中批量提取题目、选项及正确答案，
//! 为每个 HTML 文件生成同名 TXT 文件。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `QuestionRecord` 及 HTML 文件的扫描与读取
//!
//! ### ② 业务能力层（Services）
//! - `QuestionExtractor` - 从已解析文档中提取题目
//! - `OutputWriter` - 写 txt 文件
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/file_processor` - 单个文件：读取 → 提取 → 写入
//! - `orchestrator/batch_processor` - 遍历目录下所有文件并统计
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::QuestionRecord;
pub use orchestrator::{process_file, App, FileOutcome, ProcessingStats};
pub use services::{OutputWriter, QuestionExtractor};
