//! 文档提取器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责一次完整的文档解析，是文档级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **加载文档**：宽松模式解析 HTML
//! 2. **解析标题**：每个文档只解析一次
//! 3. **发现容器**：主选择器 + 备用选择器
//! 4. **遍历容器**：为本次调用新建 `ParseCtx`，逐个交给 `ContainerFlow`
//! 5. **逐个隔离**：单个容器被拒绝只记录并跳过，不影响其他容器
//! 6. **统计输出**：记录题目数、段落、跳过数
//!
//! 提取器只持有不可变的规则和选择器，可以在多个文档之间复用；
//! 需要并发提取时每个任务各用一个实例。

use crate::error::AppResult;
use crate::infrastructure::Document;
use crate::models::category::Category;
use crate::models::loaders::load_html_file;
use crate::models::question::{DataWarning, QuestionRecord};
use crate::models::rules::RuleSet;
use crate::services::{discover_containers, Selectors, TitleResolver};
use crate::utils::logging::truncate_text;
use crate::workflow::{ContainerFlow, ContainerOutcome, ParseCtx};
use std::path::Path;
use tracing::{debug, error, info};

/// 一次解析的完整结果
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    pub title: String,
    pub passage: Option<String>,
    pub records: Vec<QuestionRecord>,
    /// 找到的容器数
    pub containers: usize,
    /// 被跳过的容器数（含失败的容器）
    pub skipped: usize,
    pub warnings: Vec<DataWarning>,
}

/// 测验结果页提取器
#[derive(Debug, Clone)]
pub struct QuizExtractor {
    rules: RuleSet,
    selectors: Selectors,
}

impl QuizExtractor {
    /// 使用给定规则创建提取器，规则中的选择器在此编译
    pub fn new(rules: RuleSet) -> AppResult<Self> {
        rules.validate()?;
        let selectors = Selectors::compile(&rules.markup)?;
        Ok(Self { rules, selectors })
    }

    /// 使用内置规则创建提取器
    pub fn with_default_rules() -> AppResult<Self> {
        Self::new(RuleSet::default())
    }

    /// 解析 HTML 文本，返回题目列表
    pub fn parse(&self, html_content: &str, category: Category) -> Vec<QuestionRecord> {
        self.parse_with_report(html_content, category).records
    }

    /// 读取并解析 HTML 文件
    ///
    /// 读取失败时记录错误并返回空列表。
    pub async fn parse_file(&self, html_file_path: &Path, category: Category) -> Vec<QuestionRecord> {
        info!("正在读取 HTML 文件: {}", html_file_path.display());
        match load_html_file(html_file_path).await {
            Ok(html_content) => self.parse(&html_content, category),
            Err(e) => {
                error!("读取 HTML 文件失败: {}", e);
                Vec::new()
            }
        }
    }

    /// 解析 HTML 文本，返回带统计信息的结果
    pub fn parse_with_report(&self, html_content: &str, category: Category) -> ExtractionReport {
        let document = Document::parse(html_content);

        let title = TitleResolver::new(&self.selectors, self.rules.min_title_chars).resolve(&document);
        info!("试卷标题: {}", title);

        let containers = discover_containers(&document, &self.selectors);
        if containers.is_empty() {
            error!("❌ 未找到题目容器");
            return ExtractionReport {
                title,
                ..Default::default()
            };
        }
        info!("找到 {} 个题目容器", containers.len());

        // 每次调用都是全新的上下文，不会把上一个文档的段落或题号带过来
        let mut ctx = ParseCtx::new(title, category);
        let flow = ContainerFlow::new(&self.selectors, &self.rules);
        let mut records = Vec::new();

        for (container_index, container) in containers.iter().enumerate() {
            match flow.run(*container, container_index, &mut ctx) {
                ContainerOutcome::Question(record) => records.push(record),
                ContainerOutcome::Passage => {}
                ContainerOutcome::Skipped(reason) => {
                    debug!("容器 {} 已跳过: {:?}", container_index, reason);
                    ctx.skipped += 1;
                }
            }
        }

        info!("共提取 {} 道题目", records.len());
        if let Some(passage) = ctx.passage() {
            info!("段落: {}", truncate_text(passage, 50));
        }

        ExtractionReport {
            passage: ctx.passage().map(str::to_string),
            title: ctx.title,
            records,
            containers: containers.len(),
            skipped: ctx.skipped,
            warnings: ctx.warnings,
        }
    }
}
