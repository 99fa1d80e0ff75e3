//! 容器处理流程 - 流程层
//!
//! 核心职责：定义"一个容器"的完整处理流程
//!
//! 流程顺序：
//! 1. 段落识别（仅阅读理解，且尚未捕获段落）
//! 2. 题干提取与校验 → 相关性过滤（仅阅读理解）
//! 3. 选项提取 → 正确答案定位
//! 4. 组装记录并编号

use crate::models::question::{QuestionRecord, QuestionType};
use crate::models::rules::RuleSet;
use crate::services::{AnswerResolver, PassageClassifier, QuestionClassifier, Selectors};
use crate::utils::logging::truncate_text;
use crate::workflow::parse_ctx::ParseCtx;
use scraper::ElementRef;
use tracing::{debug, info, warn};

/// 容器处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerOutcome {
    /// 识别为阅读段落
    Passage,
    /// 识别为题目
    Question(QuestionRecord),
    /// 跳过（非题目字段或与段落无关）
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 没有通过校验的题干
    NoQuestionText,
    /// 阅读理解题与段落无关
    UnrelatedToPassage,
}

/// 容器处理流程
///
/// - 不持有文档，只借用编译好的选择器和规则
/// - 可变状态全部放在调用方传入的 ParseCtx 中
pub struct ContainerFlow<'a> {
    passage_classifier: PassageClassifier<'a>,
    question_classifier: QuestionClassifier<'a>,
    answer_resolver: AnswerResolver<'a>,
}

impl<'a> ContainerFlow<'a> {
    pub fn new(selectors: &'a Selectors, rules: &'a RuleSet) -> Self {
        Self {
            passage_classifier: PassageClassifier::new(selectors, rules),
            question_classifier: QuestionClassifier::new(selectors, rules),
            answer_resolver: AnswerResolver::new(selectors, &rules.correct_answer_phrase),
        }
    }

    pub fn run(
        &self,
        container: ElementRef<'_>,
        container_index: usize,
        ctx: &mut ParseCtx,
    ) -> ContainerOutcome {
        // ========== 1. 段落识别 ==========
        if ctx.wants_passage() {
            if let Some(passage) = self.passage_classifier.classify(container) {
                info!("📖 找到阅读段落: {}", truncate_text(&passage, 100));
                ctx.capture_passage(passage);
                return ContainerOutcome::Passage;
            }
        }

        // ========== 2. 题干 ==========
        let Some(question) = self.question_classifier.extract_text(container) else {
            debug!("容器 {} 没有有效题干，跳过", container_index);
            return ContainerOutcome::Skipped(SkipReason::NoQuestionText);
        };

        if ctx.category.is_reading_comprehension()
            && ctx.passage().is_some()
            && !self.question_classifier.is_related_to_passage(&question)
        {
            debug!("容器 {} 与段落无关，跳过: {}", container_index, question);
            return ContainerOutcome::Skipped(SkipReason::UnrelatedToPassage);
        }

        // ========== 3. 选项与答案 ==========
        let choices = self.question_classifier.extract_choices(container);
        let answer = self.answer_resolver.resolve(container);

        // ========== 4. 组装 ==========
        let record = self.assemble(question, choices, answer, ctx);

        info!(
            "题目 {}: {} -> 答案: {}",
            record.question_number,
            truncate_text(&record.question, 80),
            record.answer
        );
        if !record.answer_matches_choices() {
            warn!(
                "⚠️ 题目 {} 的答案 '{}' 不在选项中",
                record.question_number, record.answer
            );
        }

        ctx.accept(&record);
        ContainerOutcome::Question(record)
    }

    fn assemble(
        &self,
        question: String,
        choices: Vec<String>,
        answer: String,
        ctx: &ParseCtx,
    ) -> QuestionRecord {
        let passage = if ctx.category.is_reading_comprehension() {
            ctx.passage().map(str::to_string)
        } else {
            None
        };

        QuestionRecord {
            question_number: ctx.next_number(),
            question,
            question_type: QuestionType::MultipleChoice,
            choices,
            answer,
            exam: ctx.title.clone(),
            category: ctx.category,
            passage,
        }
    }
}
