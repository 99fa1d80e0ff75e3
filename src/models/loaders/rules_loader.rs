use crate::error::{AppError, AppResult, FileError};
use crate::models::rules::RuleSet;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载规则表
///
/// 文件中没有出现的字段使用内置默认值。
pub async fn load_rules(rules_file_path: &Path) -> AppResult<RuleSet> {
    let path = rules_file_path.display().to_string();

    let content = fs::read_to_string(rules_file_path)
        .await
        .map_err(|source| AppError::file_read_failed(path.clone(), source))?;

    let rules = RuleSet::from_toml_str(&content)
        .map_err(|source| FileError::TomlParseFailed { path, source })?;
    rules.validate()?;

    tracing::info!(
        "已加载规则表: {}",
        rules_file_path.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(rules)
}
