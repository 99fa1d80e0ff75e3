//! # Quiz Form Extract
//!
//! 从已批改的在线测验结果页（导出的 HTML）中提取阿拉伯语选择题
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有解析后的文档树，只暴露查询能力
//! - `Document` - 选择器查询、元素文本
//! - `clients/` - `PageFetcher` 负责远程页面获取
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只回答一个问题
//! - `TitleResolver` - 测验标题
//! - `PassageClassifier` - 阅读段落判定
//! - `QuestionClassifier` - 题干判定、选项提取、与段落的相关性
//! - `AnswerResolver` - 正确答案（多策略回退）
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个容器"的完整处理流程
//! - `ParseCtx` - 单次解析的状态（段落、题号、警告）
//! - `ContainerFlow` - 流程编排（段落 → 题干 → 相关性 → 选项 → 答案）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/extractor` - 单个文档提取器
//! - `orchestrator/merge` - 合并多个 JSON 文件
//! - `orchestrator/app` - 命令执行与结果落盘
//!
//! 所有判定阈值、关键词和选择器都放在 `models::rules::RuleSet` 中，可由 TOML 覆盖。

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::Document;
pub use models::{Category, QuestionRecord, QuestionType, RuleSet};
pub use orchestrator::{merge_files, merge_records, App, ExtractionReport, QuizExtractor};
pub use workflow::{ContainerFlow, ParseCtx};
