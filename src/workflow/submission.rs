//! 提交路径的选取与校验
//!
//! 拖放内容可能被 `{}` 包住，也可能包含多个空格分隔的路径，只取第一个。
//!
//! 注意：按空白切分意味着含空格的单个路径会被截断，这是沿用下来的行为。

use std::path::{Path, PathBuf};

use crate::error::InputError;

/// 从拖放内容中取出第一个路径
///
/// # 参数
/// - `raw`: 拖放源给出的原始字符串
///
/// # 返回
/// 返回第一个路径，内容为空时返回错误
pub fn select_dropped_path(raw: &str) -> Result<PathBuf, InputError> {
    let mut payload = raw.trim();
    if payload.starts_with('{') && payload.ends_with('}') && payload.len() >= 2 {
        payload = &payload[1..payload.len() - 1];
    }

    let first = payload
        .split_whitespace()
        .next()
        .map(strip_quotes)
        .filter(|entry| !entry.is_empty())
        .ok_or(InputError::EmptyDrop)?;

    Ok(PathBuf::from(first))
}

/// 检查扩展名是否为 `.pdf`（不区分大小写）
pub fn ensure_pdf_extension(path: &Path) -> Result<(), InputError> {
    let text = path.to_string_lossy();
    if text.to_lowercase().ends_with(".pdf") {
        Ok(())
    } else {
        Err(InputError::NotPdf {
            path: text.into_owned(),
        })
    }
}

/// 校验一个待提交的路径：扩展名 + 文件存在
pub fn validate_submission(path: &Path) -> Result<(), InputError> {
    ensure_pdf_extension(path)?;
    if !path.exists() {
        return Err(InputError::NotFound {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// 解析拖放内容并校验
pub fn select_submission(raw: &str) -> Result<PathBuf, InputError> {
    let path = select_dropped_path(raw)?;
    validate_submission(&path)?;
    Ok(path)
}

fn strip_quotes(entry: &str) -> &str {
    for quote in ['"', '\''] {
        if entry.len() >= 2 && entry.starts_with(quote) && entry.ends_with(quote) {
            return &entry[1..entry.len() - 1];
        }
    }
    entry
}
