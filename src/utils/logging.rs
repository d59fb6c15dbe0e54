/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则按 `verbose` 选择 debug / info 级别。
/// 重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `input_dir`: 扫描目录
pub fn log_startup(input_dir: &Path) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题目提取模式");
    info!("📁 扫描目录: {}", input_dir.display());
    info!("{}", "=".repeat(60));
}

/// 记录文件扫描结果
pub fn log_files_found(total: usize) {
    info!("✓ 找到 {} 个待处理的 HTML 文件\n", total);
}

/// 打印最终统计信息
///
/// # 参数
/// - `written`: 生成输出的文件数
/// - `empty`: 未提取到题目的文件数
/// - `failed`: 失败数量
/// - `total`: 总数
/// - `questions`: 提取的题目总数
pub fn print_final_stats(written: usize, empty: usize, failed: usize, total: usize, questions: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 已生成: {}/{}", written, total);
    info!("⚪ 无题目: {}", empty);
    info!("❌ 失败: {}", failed);
    info!("📝 题目总数: {}", questions);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
