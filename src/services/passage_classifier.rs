//! 段落识别（仅阅读理解）
//!
//! 一个容器只有同时满足以下全部条件才被当作阅读段落：
//! 长度足够、没有选项组、不以疑问/祈使词开头、至少两个句末标点、
//! 阿拉伯字符占比足够、不含"根据文章"一类的指代短语。

use crate::infrastructure::document::first_text;
use crate::models::rules::RuleSet;
use crate::services::selectors::Selectors;
use crate::services::text::{arabic_ratio, char_len, count_terminators, find_phrase, find_prefix};
use scraper::ElementRef;
use std::fmt;
use tracing::debug;

/// 段落被拒绝的原因
#[derive(Debug, Clone, PartialEq)]
pub enum PassageRejection {
    NoText,
    TooShort(usize),
    HasRadioGroup,
    QuestionOpener(String),
    FewTerminators(usize),
    LowArabicRatio(f64),
    ReferencesPassage(String),
}

impl fmt::Display for PassageRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassageRejection::NoText => write!(f, "没有文本"),
            PassageRejection::TooShort(len) => write!(f, "长度不足 ({} 字符)", len),
            PassageRejection::HasRadioGroup => write!(f, "包含选项组"),
            PassageRejection::QuestionOpener(p) => write!(f, "以疑问词开头: {}", p),
            PassageRejection::FewTerminators(n) => write!(f, "句末标点不足 ({})", n),
            PassageRejection::LowArabicRatio(r) => write!(f, "阿拉伯字符占比过低 ({:.2})", r),
            PassageRejection::ReferencesPassage(p) => write!(f, "含指代短语: {}", p),
        }
    }
}

pub struct PassageClassifier<'a> {
    selectors: &'a Selectors,
    rules: &'a RuleSet,
}

impl<'a> PassageClassifier<'a> {
    pub fn new(selectors: &'a Selectors, rules: &'a RuleSet) -> Self {
        Self { selectors, rules }
    }

    /// 判断容器是否为阅读段落，是则返回段落文本
    pub fn classify(&self, container: ElementRef<'_>) -> Option<String> {
        match self.check(container) {
            Ok(text) => Some(text),
            Err(reason) => {
                debug!("非段落容器: {}", reason);
                None
            }
        }
    }

    /// 候选文本：主选择器优先，其后依次尝试备用选择器
    fn candidate_text(&self, container: ElementRef<'_>) -> Option<String> {
        self.selectors
            .text
            .iter()
            .find_map(|selector| first_text(container, selector))
    }

    pub fn check(&self, container: ElementRef<'_>) -> Result<String, PassageRejection> {
        let text = self
            .candidate_text(container)
            .ok_or(PassageRejection::NoText)?;

        if container.select(&self.selectors.radio_group).next().is_some() {
            return Err(PassageRejection::HasRadioGroup);
        }

        self.check_text(&text)?;
        Ok(text)
    }

    /// 纯文本部分的判断
    pub fn check_text(&self, text: &str) -> Result<(), PassageRejection> {
        let rules = self.rules;

        let len = char_len(text);
        if len < rules.min_passage_chars {
            return Err(PassageRejection::TooShort(len));
        }

        if let Some(prefix) = find_prefix(text, &rules.question_openers) {
            return Err(PassageRejection::QuestionOpener(prefix.to_string()));
        }

        let terminators = count_terminators(text, &rules.sentence_terminators);
        if terminators < rules.min_passage_terminators {
            return Err(PassageRejection::FewTerminators(terminators));
        }

        let ratio = arabic_ratio(text);
        if ratio < rules.min_passage_arabic_ratio {
            return Err(PassageRejection::LowArabicRatio(ratio));
        }

        if let Some(phrase) = find_phrase(text, &rules.passage_references) {
            return Err(PassageRejection::ReferencesPassage(phrase.to_string()));
        }

        Ok(())
    }
}
