//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文件处理器
//! - 扫描目录，逐个处理 HTML 文件
//! - 单个文件失败不影响其他文件
//! - 输出全局统计信息
//!
//! ### `file_processor` - 单个文件处理器
//! - 读取并解析单个 HTML 文件
//! - 调用 `QuestionExtractor` 提取题目
//! - 有题目时写入同名 txt 文件
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PathBuf>)
//!     ↓
//! file_processor (处理单个文件)
//!     ↓
//! services (能力层：extract / write)
//! ```

pub mod batch_processor;
pub mod file_processor;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};
pub use file_processor::{process_file, FileOutcome};
