//! 输出文件命名

use chrono::{DateTime, Local};
use regex::Regex;
use std::path::Path;

/// 用户给出的输出名没有 .json 后缀时补上
pub fn ensure_json_extension(name: &str) -> String {
    if name.to_ascii_lowercase().ends_with(".json") {
        name.to_string()
    } else {
        format!("{}.json", name)
    }
}

/// `results.html` → `results.json`
pub fn json_name_for_file(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    if stem.is_empty() {
        return "questions.json".to_string();
    }
    format!("{}.json", stem)
}

/// 由 URL 最后一段路径生成文件名，没有可用路径时使用时间戳
pub fn json_name_for_url(url: &str, now: DateTime<Local>) -> String {
    let fallback = format!("extracted_{}.json", now.format("%Y%m%d_%H%M%S"));
    if is_host_only(url) {
        return fallback;
    }

    let path = url.split(['?', '#']).next().unwrap_or_default().trim_end_matches('/');
    let segment = path.rsplit('/').next().unwrap_or_default();
    let segment = segment
        .strip_suffix(".html")
        .or_else(|| segment.strip_suffix(".htm"))
        .unwrap_or(segment);

    // 文件名只保留字母、数字、下划线和连字符
    let sanitized = match Regex::new(r"[^\p{L}\p{N}_\-]+") {
        Ok(re) => re.replace_all(segment, "_").into_owned(),
        Err(_) => segment.to_string(),
    };
    let sanitized = sanitized.trim_matches('_');
    if sanitized.is_empty() {
        return fallback;
    }
    format!("{}.json", sanitized)
}

/// 合并输出文件名
pub fn merged_file_name(total: usize) -> String {
    format!("merged_questions_{}_questions.json", total)
}

fn is_host_only(url: &str) -> bool {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let without_query = without_scheme.split(['?', '#']).next().unwrap_or_default();
    !without_query.trim_end_matches('/').contains('/')
}
