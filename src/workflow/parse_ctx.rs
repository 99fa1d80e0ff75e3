//! 解析上下文
//!
//! 封装"这一次解析调用"的全部可变状态：段落缓冲、题号计数、跳过计数、警告。
//! 每次解析调用都新建一个上下文，引擎本身不保存任何状态。

use crate::models::category::Category;
use crate::models::question::{DataWarning, QuestionRecord};

/// 单次解析调用的上下文
#[derive(Debug, Clone)]
pub struct ParseCtx {
    /// 试卷标题
    pub title: String,

    /// 调用方选定的分类
    pub category: Category,

    /// 已捕获的段落（每个文档至多一个）
    passage: Option<String>,

    /// 下一道题的题号（从1开始）
    next_number: usize,

    /// 被跳过的容器数
    pub skipped: usize,

    /// 数据质量警告
    pub warnings: Vec<DataWarning>,
}

impl ParseCtx {
    pub fn new(title: String, category: Category) -> Self {
        Self {
            title,
            category,
            passage: None,
            next_number: 1,
            skipped: 0,
            warnings: Vec::new(),
        }
    }

    /// 是否还需要尝试识别段落
    pub fn wants_passage(&self) -> bool {
        self.category.is_reading_comprehension() && self.passage.is_none()
    }

    pub fn passage(&self) -> Option<&str> {
        self.passage.as_deref()
    }

    /// 记录段落；已有段落时忽略
    pub fn capture_passage(&mut self, text: String) -> bool {
        if self.passage.is_some() {
            return false;
        }
        self.passage = Some(text);
        true
    }

    /// 即将分配的题号
    pub fn next_number(&self) -> usize {
        self.next_number
    }

    /// 接受一道题，题号加一
    pub fn accept(&mut self, record: &QuestionRecord) {
        if !record.answer_matches_choices() {
            self.warnings.push(DataWarning {
                question_number: record.question_number,
                question: record.question.clone(),
                answer: record.answer.clone(),
            });
        }
        self.next_number += 1;
    }

    /// 已接受的题目数
    pub fn accepted(&self) -> usize {
        self.next_number - 1
    }
}
