use crate::error::{AppError, AppResult, FileError};
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// 读取 HTML 文件
///
/// 导出页面不一定是合法的 UTF-8，无效字节按替换字符处理。
pub async fn load_html_file(html_file_path: &Path) -> AppResult<String> {
    let bytes = fs::read(html_file_path)
        .await
        .map_err(|source| AppError::file_read_failed(html_file_path.display().to_string(), source))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 读取一个题目 JSON 文件（合并输入）
///
/// 顶层不是数组时包装为单元素列表，`null` 视为空列表。
pub async fn load_json_records(json_file_path: &Path) -> AppResult<Vec<Value>> {
    let path = json_file_path.display().to_string();

    let content = fs::read_to_string(json_file_path)
        .await
        .map_err(|source| AppError::file_read_failed(path.clone(), source))?;

    let value: Value = serde_json::from_str(&content)
        .map_err(|source| FileError::JsonParseFailed { path, source })?;

    Ok(match value {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    })
}
