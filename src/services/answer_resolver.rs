//! 正确答案定位
//!
//! 导出页面至少有三种标记正确答案的方式，按优先级依次尝试：
//!
//! 1. 专门的"正确答案"区块（答错时出现），区块内标签的显示文本
//! 2. 完整文本包含"إجابة صحيحة"的选项标签
//! 3. 包含"إجابة صحيحة"的标记元素，向上找到最近的标签
//!
//! 全部失败时返回空字符串：未评分的试卷本来就没有答案标记。

use crate::infrastructure::document::element_text;
use crate::services::selectors::Selectors;
use scraper::ElementRef;
use tracing::debug;

pub struct AnswerResolver<'a> {
    selectors: &'a Selectors,
    phrase: &'a str,
}

impl<'a> AnswerResolver<'a> {
    pub fn new(selectors: &'a Selectors, phrase: &'a str) -> Self {
        Self { selectors, phrase }
    }

    /// 定位正确答案，找不到时返回空字符串
    pub fn resolve(&self, container: ElementRef<'_>) -> String {
        let strategies: [(&str, fn(&Self, ElementRef<'_>) -> Option<String>); 3] = [
            ("正确答案区块", Self::from_correct_section),
            ("标签文本", Self::from_marked_label),
            ("标记元素", Self::from_marker_ancestor),
        ];

        for (name, strategy) in strategies {
            if let Some(answer) = strategy(self, container) {
                debug!("通过{}找到正确答案: {}", name, answer);
                return answer;
            }
        }
        String::new()
    }

    /// 标签内的选项显示文本
    fn label_choice_text(&self, label: ElementRef<'_>) -> Option<String> {
        label
            .select(&self.selectors.choice_text)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
    }

    fn from_correct_section(&self, container: ElementRef<'_>) -> Option<String> {
        let section = container.select(&self.selectors.correct_section).next()?;
        let label = section.select(&self.selectors.label).next()?;
        self.label_choice_text(label)
    }

    fn from_marked_label(&self, container: ElementRef<'_>) -> Option<String> {
        container
            .select(&self.selectors.label)
            .filter(|label| label.text().collect::<String>().contains(self.phrase))
            .find_map(|label| self.label_choice_text(label))
    }

    fn from_marker_ancestor(&self, container: ElementRef<'_>) -> Option<String> {
        container
            .select(&self.selectors.correct_marker)
            .filter(|marker| marker.text().collect::<String>().contains(self.phrase))
            .find_map(|marker| {
                let label = marker
                    .ancestors()
                    .filter_map(ElementRef::wrap)
                    .find(|el| self.selectors.label.matches(el))?;
                self.label_choice_text(label)
            })
    }
}
