//! 题目识别
//!
//! 题干校验是一个按顺序执行的规则级联，第一条命中的规则决定结果：
//!
//! 1. 太短 → 拒绝
//! 2. 是表单字段（学生姓名、密码、考试名称、分数、日期、时长、年级）→ 拒绝
//! 3. 含疑问/祈使标记 → 接受
//! 4. 阿拉伯字符占比不足 → 拒绝
//! 5. 过长且无疑问标记，视为未归类的散文 → 拒绝
//! 6. 其余 → 接受

use crate::infrastructure::document::{element_text, first_text};
use crate::models::rules::RuleSet;
use crate::services::selectors::Selectors;
use crate::services::text::{arabic_ratio, char_len, find_phrase, strip_field_suffix};
use scraper::ElementRef;
use std::fmt;
use tracing::debug;

/// 题干校验结果
#[derive(Debug, Clone, PartialEq)]
pub enum TextVerdict {
    /// 含疑问标记，直接接受
    Marked(String),
    /// 无标记但满足阿拉伯字符占比
    Accepted,
    TooShort(usize),
    MetadataField(String),
    LowArabicRatio(f64),
    UnmarkedProse(usize),
}

impl TextVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, TextVerdict::Marked(_) | TextVerdict::Accepted)
    }
}

impl fmt::Display for TextVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextVerdict::Marked(m) => write!(f, "含疑问标记: {}", m),
            TextVerdict::Accepted => write!(f, "接受"),
            TextVerdict::TooShort(len) => write!(f, "太短 ({} 字符)", len),
            TextVerdict::MetadataField(m) => write!(f, "表单字段: {}", m),
            TextVerdict::LowArabicRatio(r) => write!(f, "阿拉伯字符占比过低 ({:.2})", r),
            TextVerdict::UnmarkedProse(len) => write!(f, "无疑问标记的长文本 ({} 字符)", len),
        }
    }
}

pub struct QuestionClassifier<'a> {
    selectors: &'a Selectors,
    rules: &'a RuleSet,
}

impl<'a> QuestionClassifier<'a> {
    pub fn new(selectors: &'a Selectors, rules: &'a RuleSet) -> Self {
        Self { selectors, rules }
    }

    /// 提取题干
    ///
    /// 按选择器优先级取第一个非空文本，只校验这一个候选。
    /// 备用选择器只在前面的选择器没有文本时使用，被拒绝的题干不会退回到作答区。
    pub fn extract_text(&self, container: ElementRef<'_>) -> Option<String> {
        let text = self
            .selectors
            .text
            .iter()
            .find_map(|selector| first_text(container, selector))?;

        let verdict = self.validate(&text);
        if verdict.is_accepted() {
            Some(text)
        } else {
            debug!("跳过候选题干 ({}): {}", verdict, text);
            None
        }
    }

    pub fn is_valid_question_text(&self, text: &str) -> bool {
        self.validate(text).is_accepted()
    }

    /// 规则级联
    pub fn validate(&self, text: &str) -> TextVerdict {
        let rules = self.rules;
        let text = text.trim();

        let len = char_len(text);
        if len < rules.min_question_chars {
            return TextVerdict::TooShort(len);
        }

        let field = strip_field_suffix(text);
        if let Some(exact) = rules.metadata_fields.iter().find(|f| f.as_str() == field) {
            return TextVerdict::MetadataField(exact.clone());
        }
        if let Some(marker) = find_phrase(text, &rules.metadata_markers) {
            return TextVerdict::MetadataField(marker.to_string());
        }

        if let Some(marker) = find_phrase(text, &rules.question_markers) {
            return TextVerdict::Marked(marker.to_string());
        }

        let ratio = arabic_ratio(text);
        if ratio < rules.min_question_arabic_ratio {
            return TextVerdict::LowArabicRatio(ratio);
        }

        if len > rules.max_unmarked_question_chars {
            return TextVerdict::UnmarkedProse(len);
        }

        TextVerdict::Accepted
    }

    /// 阅读理解题与段落的相关性
    ///
    /// 含指代短语、含通用疑问词、或长度足够，任一满足即视为相关。
    /// 模棱两可的题目倾向于保留。
    pub fn is_related_to_passage(&self, text: &str) -> bool {
        let rules = self.rules;
        find_phrase(text, &rules.passage_references).is_some()
            || find_phrase(text, &rules.generic_interrogatives).is_some()
            || char_len(text.trim()) >= rules.min_related_question_chars
    }

    /// 提取选项：文档顺序，去除首尾空白，按精确匹配去重
    pub fn extract_choices(&self, container: ElementRef<'_>) -> Vec<String> {
        let Some(radio_group) = container.select(&self.selectors.radio_group).next() else {
            return Vec::new();
        };

        let mut choices: Vec<String> = Vec::new();
        for label in radio_group.select(&self.selectors.label) {
            let Some(choice) = label.select(&self.selectors.choice_text).next().map(element_text)
            else {
                continue;
            };
            if !choice.is_empty() && !choices.contains(&choice) {
                choices.push(choice);
            }
        }
        choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Document;
    use scraper::Selector;

    fn with_classifier<T>(f: impl FnOnce(&QuestionClassifier<'_>) -> T) -> T {
        let rules = RuleSet::default();
        let selectors = Selectors::compile(&rules.markup).unwrap();
        let classifier = QuestionClassifier::new(&selectors, &rules);
        f(&classifier)
    }

    #[test]
    fn test_student_name_is_rejected() {
        with_classifier(|c| {
            assert!(!c.is_valid_question_text("اسم الطالب"));
            assert!(!c.is_valid_question_text("اسم الطالب :"));
            assert!(!c.is_valid_question_text("كلمة المرور:"));
            assert!(matches!(c.validate("الاختبار"), TextVerdict::MetadataField(_)));
        });
    }

    #[test]
    fn test_rule_order() {
        with_classifier(|c| {
            assert!(matches!(c.validate("ما؟"), TextVerdict::TooShort(3)));
            assert!(matches!(
                c.validate("ما مرادف كلمة شجاع؟"),
                TextVerdict::Marked(_)
            ));
            // 类比题：没有疑问标记，但几乎全是阿拉伯字符
            assert_eq!(c.validate("قلم : كتابة"), TextVerdict::Accepted);
            assert!(matches!(
                c.validate("Student number 12345"),
                TextVerdict::LowArabicRatio(_)
            ));
            let prose = "كان الجو جميلا والسماء صافية والطيور تغرد فوق الأشجار العالية في الحديقة الكبيرة القريبة من البيت القديم";
            assert!(char_len(prose) > 100);
            assert!(matches!(c.validate(prose), TextVerdict::UnmarkedProse(_)));
        });
    }

    #[test]
    fn test_relatedness_defaults_to_keep() {
        with_classifier(|c| {
            assert!(c.is_related_to_passage("الفكرة حسب النص"));
            assert!(c.is_related_to_passage("لماذا ذهب"));
            assert!(c.is_related_to_passage("كلمة مكتوبة في سطر طويل نسبيا"));
            assert!(!c.is_related_to_passage("قلم : كتابة"));
        });
    }

    #[test]
    fn test_choices_are_deduplicated_in_order() {
        let html = r#"
            <div role="listitem">
              <div role="radiogroup">
                <label><span class="aDTYNe"> فرح </span></label>
                <label><span class="aDTYNe">حزن</span></label>
                <label><span class="aDTYNe">فرح</span></label>
                <label><span class="aDTYNe">  </span></label>
                <label><span class="other">ليس خيارا</span></label>
              </div>
            </div>
        "#;
        let document = Document::parse(html);
        let container_sel = Selector::parse("[role=\"listitem\"]").unwrap();
        let container = document.select_first(&container_sel).unwrap();
        with_classifier(|c| {
            assert_eq!(c.extract_choices(container), vec!["فرح", "حزن"]);
        });
    }

    fn first_container(document: &Document) -> ElementRef<'_> {
        let container_sel = Selector::parse("[role=\"listitem\"]").unwrap();
        document.select_first(&container_sel).unwrap()
    }

    #[test]
    fn test_rejected_field_does_not_fall_through_to_response() {
        let html = r#"
            <div role="listitem">
              <div role="heading"><span class="M7eMe">اسم الطالب</span></div>
              <div dir="auto">محمد عبدالله السالم</div>
            </div>
        "#;
        let document = Document::parse(html);
        with_classifier(|c| {
            assert_eq!(c.extract_text(first_container(&document)), None);
        });
    }

    #[test]
    fn test_extract_text_uses_fallback_when_primary_missing() {
        let html = r#"
            <div role="listitem">
              <div role="heading">ما عاصمة مصر؟</div>
            </div>
        "#;
        let document = Document::parse(html);
        with_classifier(|c| {
            assert_eq!(
                c.extract_text(first_container(&document)).as_deref(),
                Some("ما عاصمة مصر؟")
            );
        });
    }
}
