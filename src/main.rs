use anyhow::{Context, Result};
use quiz_extract::utils::logging;
use quiz_extract::{App, Config};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置：TOML 文件（可选）→ 环境变量 → 命令行目录参数
    let base = match std::env::var("QUIZ_CONFIG") {
        Ok(path) => Config::load_file(&PathBuf::from(&path))
            .with_context(|| format!("无法加载配置文件: {}", path))?,
        Err(_) => Config::default(),
    };
    let mut config = base.overlay_env();
    if let Some(dir) = std::env::args().nth(1) {
        config = config.with_input_dir(dir);
    }

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run().await?;

    Ok(())
}
