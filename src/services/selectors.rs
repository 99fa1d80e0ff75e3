//! 预编译的选择器集合
//!
//! 规则表里的选择器是字符串，在构造引擎时一次性编译，
//! 非法选择器在这里报错，而不是在解析某个页面时才暴露出来。

use crate::error::{AppError, AppResult};
use crate::models::rules::MarkupProfile;
use scraper::Selector;

/// 编译后的页面标记
#[derive(Debug, Clone)]
pub struct Selectors {
    pub title: Vec<Selector>,
    pub title_fallback: Selector,
    pub container: Selector,
    pub container_fallback: Selector,
    pub text: Vec<Selector>,
    pub radio_group: Selector,
    pub label: Selector,
    pub choice_text: Selector,
    pub correct_section: Selector,
    pub correct_marker: Selector,
}

impl Selectors {
    pub fn compile(markup: &MarkupProfile) -> AppResult<Self> {
        Ok(Self {
            title: compile_all("title_selectors", &markup.title_selectors)?,
            title_fallback: compile("title_fallback_selector", &markup.title_fallback_selector)?,
            container: compile("container_selector", &markup.container_selector)?,
            container_fallback: compile(
                "container_fallback_selector",
                &markup.container_fallback_selector,
            )?,
            text: compile_all("text_selectors", &markup.text_selectors)?,
            radio_group: compile("radio_group_selector", &markup.radio_group_selector)?,
            label: compile("label_selector", &markup.label_selector)?,
            choice_text: compile("choice_text_selector", &markup.choice_text_selector)?,
            correct_section: compile("correct_section_selector", &markup.correct_section_selector)?,
            correct_marker: compile("correct_marker_selector", &markup.correct_marker_selector)?,
        })
    }
}

fn compile(field: &str, selector: &str) -> AppResult<Selector> {
    Selector::parse(selector).map_err(|e| AppError::invalid_selector(field, selector, e))
}

fn compile_all(field: &str, selectors: &[String]) -> AppResult<Vec<Selector>> {
    selectors.iter().map(|s| compile(field, s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_compiles() {
        let selectors = Selectors::compile(&MarkupProfile::default()).unwrap();
        assert_eq!(selectors.title.len(), 4);
        assert_eq!(selectors.text.len(), 4);
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let markup = MarkupProfile {
            container_selector: "div[role=".to_string(),
            ..MarkupProfile::default()
        };
        let err = Selectors::compile(&markup).unwrap_err();
        assert!(err.to_string().contains("container_selector"));
    }
}
