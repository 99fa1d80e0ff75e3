//! 合并多个题目 JSON 文件
//!
//! 按给定顺序拼接，并把 `question_number` 重新编号为 1..N。
//! 没有 `question` 字段的记录（以及非对象的条目）在合并时被丢弃。

use crate::error::{AppResult, MergeError};
use crate::models::loaders::load_json_records;
use futures::future::join_all;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// 合并至少需要的文件数
pub const MIN_MERGE_INPUTS: usize = 2;

/// 拼接并重新编号
pub fn merge_records<I>(batches: I) -> Vec<Value>
where
    I: IntoIterator<Item = Vec<Value>>,
{
    let mut merged = Vec::new();
    let mut question_number = 1;

    for batch in batches {
        for mut record in batch {
            let Some(object) = record.as_object_mut() else {
                debug!("丢弃非对象条目");
                continue;
            };
            if !object.contains_key("question") {
                debug!("丢弃缺少 question 字段的记录");
                continue;
            }
            object.insert("question_number".to_string(), json!(question_number));
            merged.push(record);
            question_number += 1;
        }
    }

    merged
}

/// 读取并合并多个 JSON 文件
///
/// 文件并发读取，结果按输入顺序拼接；读取失败的文件记录错误后跳过。
pub async fn merge_files(paths: &[PathBuf]) -> AppResult<Vec<Value>> {
    if paths.len() < MIN_MERGE_INPUTS {
        return Err(MergeError::NotEnoughInputs {
            required: MIN_MERGE_INPUTS,
            given: paths.len(),
        }
        .into());
    }

    let loaded = join_all(paths.iter().map(|path| load_json_records(path))).await;

    let batches = paths.iter().zip(loaded).filter_map(|(path, result)| match result {
        Ok(records) => {
            info!("已读取 {}: {} 条记录", display_name(path), records.len());
            Some(records)
        }
        Err(e) => {
            error!("读取文件失败 {}: {}", path.display(), e);
            None
        }
    });

    let merged = merge_records(batches);
    if merged.is_empty() {
        return Err(MergeError::EmptyResult.into());
    }

    Ok(merged)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renumbering_and_drop_quirk() {
        let first = vec![
            json!({"question_number": 7, "question": "أ", "answer": ""}),
            json!({"question_number": 8, "answer": "بدون سؤال"}),
        ];
        let second = vec![
            json!("not an object"),
            json!({"question_number": 1, "question": "ب"}),
        ];

        let merged = merge_records(vec![first, second]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0]["question_number"], 1);
        assert_eq!(merged[0]["question"], "أ");
        assert_eq!(merged[1]["question_number"], 2);
        assert_eq!(merged[1]["question"], "ب");
    }

    #[test]
    fn test_other_fields_are_preserved() {
        let merged = merge_records(vec![vec![
            json!({"question": "س", "passage": "نص", "choices": ["أ", "ب"]}),
        ]]);
        assert_eq!(merged[0]["passage"], "نص");
        assert_eq!(merged[0]["choices"][1], "ب");
    }

    #[tokio::test]
    async fn test_requires_two_inputs() {
        let result = merge_files(&[PathBuf::from("a.json")]).await;
        assert!(result.is_err());
    }
}
