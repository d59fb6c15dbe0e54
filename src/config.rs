use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 待扫描的 HTML 目录
    pub input_dir: PathBuf,
    /// 输入文件扩展名
    pub input_extension: String,
    /// 输出文件扩展名
    pub output_extension: String,
    /// 答案行前缀
    pub answer_prefix: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            input_extension: "html".to_string(),
            output_extension: "txt".to_string(),
            answer_prefix: "answer: ".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().overlay_env()
    }

    /// 用环境变量覆盖已有配置
    pub fn overlay_env(self) -> Self {
        Self {
            input_dir: std::env::var("QUIZ_INPUT_DIR").map(PathBuf::from).unwrap_or(self.input_dir),
            input_extension: std::env::var("QUIZ_INPUT_EXT").unwrap_or(self.input_extension),
            output_extension: std::env::var("QUIZ_OUTPUT_EXT").unwrap_or(self.output_extension),
            answer_prefix: std::env::var("QUIZ_ANSWER_PREFIX").unwrap_or(self.answer_prefix),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 解析 TOML 配置，未出现的字段使用默认值
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|source| AppError::ConfigParse {
            path: String::new(),
            source,
        })
    }

    /// 从 TOML 文件加载配置
    pub fn load_file(path: &Path) -> AppResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AppError::read_failed(path, e))?;
        toml::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }
}
