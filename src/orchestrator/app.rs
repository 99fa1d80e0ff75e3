//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 本模块是命令行的执行者，负责资源准备和结果落盘。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：加载规则表、创建提取器
//! 2. **提取**：从本地文件或 URL 读取页面，交给 `QuizExtractor`
//! 3. **合并**：读取多个 JSON 文件，重新编号后输出
//! 4. **结果落盘**：写 JSON 文件、写 warn.txt
//! 5. **统计输出**：记录题目数、分类、文件名

use crate::clients::page_fetcher::{is_url, PageFetcher};
use crate::config::Config;
use crate::models::category::Category;
use crate::models::loaders::{load_html_file, load_rules};
use crate::models::rules::RuleSet;
use crate::orchestrator::extractor::QuizExtractor;
use crate::orchestrator::merge::merge_files;
use crate::services::WarnWriter;
use crate::utils::logging::{print_extract_stats, print_merge_stats};
use crate::utils::naming::{ensure_json_extension, json_name_for_file, json_name_for_url, merged_file_name};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    extractor: QuizExtractor,
    warn_writer: WarnWriter,
}

impl App {
    /// 初始化应用
    ///
    /// `rules_override` 优先于配置中的规则文件。
    pub async fn initialize(config: Config, rules_override: Option<&Path>) -> Result<Self> {
        let rules_path = rules_override
            .map(Path::to_path_buf)
            .or_else(|| config.rules_file.as_ref().map(PathBuf::from));

        let rules = match rules_path {
            Some(path) => load_rules(&path)
                .await
                .with_context(|| format!("无法加载规则文件: {}", path.display()))?,
            None => RuleSet::default(),
        };

        let extractor = QuizExtractor::new(rules).context("规则表无效")?;
        let warn_writer = WarnWriter::with_path(config.warn_file.clone());

        Ok(Self {
            config,
            extractor,
            warn_writer,
        })
    }

    /// 提取题目并写入 JSON
    ///
    /// # 参数
    /// - `source`: 本地 HTML 文件路径或 http(s) 地址
    /// - `category`: 分类
    /// - `output`: 输出文件名（可选）
    ///
    /// # 返回
    /// 返回写入的文件路径；没有提取到题目时返回 None，不写文件
    pub async fn extract(
        &self,
        source: &str,
        category: Category,
        output: Option<&str>,
    ) -> Result<Option<PathBuf>> {
        info!("📋 分类: {}", category);

        let (html_content, default_name) = if is_url(source) {
            let fetcher = PageFetcher::new(&self.config)?;
            let body = fetcher.fetch(source).await?;
            (body, json_name_for_url(source, chrono::Local::now()))
        } else {
            let path = Path::new(source);
            let body = load_html_file(path).await?;
            (body, json_name_for_file(path))
        };

        let report = self.extractor.parse_with_report(&html_content, category);

        if report.records.is_empty() {
            warn!("❌ 未在页面中找到题目");
            return Ok(None);
        }

        if !report.warnings.is_empty() {
            warn!("⚠️ {} 道题目的答案不在选项中，写入 {}", report.warnings.len(), self.config.warn_file);
            self.warn_writer.write(source, &report.warnings)?;
        }

        let file_name = output.map(ensure_json_extension).unwrap_or(default_name);
        let output_path = self.output_path(&file_name);
        write_json(&output_path, &report.records).await?;

        print_extract_stats(report.records.len(), category.label(), &file_name);

        Ok(Some(output_path))
    }

    /// 合并多个 JSON 文件
    pub async fn merge(&self, inputs: &[PathBuf], output: Option<&str>) -> Result<PathBuf> {
        let merged = merge_files(inputs).await?;

        let file_name = output
            .map(ensure_json_extension)
            .unwrap_or_else(|| merged_file_name(merged.len()));
        let output_path = self.output_path(&file_name);
        write_json(&output_path, &merged).await?;

        let names: Vec<String> = inputs
            .iter()
            .map(|p| p.file_name().unwrap_or_default().to_string_lossy().to_string())
            .collect();
        print_merge_stats(&names, merged.len(), &file_name);

        Ok(output_path)
    }

    /// 列出所有分类
    pub fn list_categories(&self) -> Vec<String> {
        Category::ALL
            .iter()
            .map(|c| format!("{}. {}", c.key(), c.label()))
            .collect()
    }

    fn output_path(&self, file_name: &str) -> PathBuf {
        Path::new(&self.config.output_dir).join(file_name)
    }
}

/// 以缩进格式写入 JSON，保留非 ASCII 字符原样
async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("无法创建目录: {}", parent.display()))?;
        }
    }
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("无法写入文件: {}", path.display()))?;
    info!("💾 已保存: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quiz_app_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn config_for(dir: &Path) -> Config {
        Config {
            output_dir: dir.to_string_lossy().to_string(),
            warn_file: dir.join("warn.txt").to_string_lossy().to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_extract_without_questions_writes_nothing() {
        let dir = temp_dir("empty");
        let html_path = dir.join("empty.html");
        std::fs::write(&html_path, "<html><body>لا شيء</body></html>").unwrap();

        let app = App::initialize(config_for(&dir), None).await.unwrap();
        let result = app
            .extract(&html_path.to_string_lossy(), Category::VerbalAnalogy, None)
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(!dir.join("empty.json").exists());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_categories_menu() {
        let app = App::initialize(Config::default(), None).await.unwrap();
        let menu = app.list_categories();
        assert_eq!(menu.len(), 5);
        assert_eq!(menu[2], "3. استيعاب المقروء");
    }
}
