//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 加载规则表、创建提取器
//! - 从文件或 URL 读取页面，写出 JSON 和 warn.txt
//! - 合并多个 JSON 文件
//!
//! ### `extractor` - 单个文档提取器
//! - 解析标题、发现容器
//! - 为每次调用新建 `ParseCtx`，遍历容器
//! - 隔离单个容器的失败
//!
//! ### `merge` - 合并工具
//! - 拼接多个题目列表并重新编号
//!
//! ## 层次关系
//!
//! ```text
//! app (处理命令)
//!     ↓
//! extractor (处理一个文档)
//!     ↓
//! workflow::ContainerFlow (处理单个容器)
//!     ↓
//! services (能力层：标题 / 容器 / 段落 / 题目 / 答案)
//!     ↓
//! infrastructure (基础设施：Document)
//! ```

pub mod app;
pub mod extractor;
pub mod merge;

// 重新导出主要类型
pub use app::App;
pub use extractor::{ExtractionReport, QuizExtractor};
pub use merge::{merge_files, merge_records};
