use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 列出目录下指定扩展名的所有文件（不递归），按路径排序
pub async fn find_html_files(dir: &Path, extension: &str) -> AppResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AppError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| AppError::read_failed(dir, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::read_failed(dir, e))?
    {
        let path = entry.path();
        let matches_ext = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if !matches_ext {
            continue;
        }

        match entry.file_type().await {
            Ok(file_type) if file_type.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!("无法读取文件类型 {}: {}", path.display(), e),
        }
    }

    files.sort();
    Ok(files)
}

/// 输出文件路径：同名，替换扩展名
pub fn output_path_for(input: &Path, output_extension: &str) -> PathBuf {
    input.with_extension(output_extension)
}

/// 读取 HTML 文件内容，要求 UTF-8 编码
pub async fn load_html_document(path: &Path) -> AppResult<String> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| AppError::read_failed(path, e))?;

    String::from_utf8(bytes).map_err(|source| AppError::DecodeFailed {
        path: path.to_path_buf(),
        source,
    })
}
