//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::question::DataWarning;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 警告写入服务
///
/// 将答案不在选项中的题目追加写入 warn.txt，便于人工核对
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 写入一批警告
    ///
    /// # 参数
    /// - `source`: 来源（文件名或 URL）
    /// - `warnings`: 数据质量警告
    pub fn write(&self, source: &str, warnings: &[DataWarning]) -> AppResult<()> {
        if warnings.is_empty() {
            return Ok(());
        }

        debug!("写入 {} 条警告: {}", warnings.len(), source);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))?;

        let mut warn_msg = String::new();
        for warning in warnings {
            warn_msg.push_str(&format!("来源 {} | {}\n", source, warning));
        }

        file.write_all(warn_msg.as_bytes())
            .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_warnings() {
        let path = std::env::temp_dir().join(format!("warn_{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let writer = WarnWriter::with_path(path.to_string_lossy());

        let warning = DataWarning {
            question_number: 3,
            question: "ما معنى كلمة؟".to_string(),
            answer: "غير موجود".to_string(),
        };
        writer.write("a.html", &[warning.clone()]).unwrap();
        writer.write("b.html", &[warning]).unwrap();
        writer.write("c.html", &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("来源 a.html | 题目 3"));

        std::fs::remove_file(&path).ok();
    }
}
