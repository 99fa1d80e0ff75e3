//! 标题解析
//!
//! 按优先级依次尝试标题选择器，第一个足够长的文本胜出；
//! 全部失败时在带 heading 角色的标题元素中找第一个含阿拉伯字符的。

use crate::infrastructure::document::{element_text, Document};
use crate::services::selectors::Selectors;
use crate::services::text::{char_len, contains_arabic};
use tracing::debug;

pub struct TitleResolver<'a> {
    selectors: &'a Selectors,
    min_chars: usize,
}

impl<'a> TitleResolver<'a> {
    pub fn new(selectors: &'a Selectors, min_chars: usize) -> Self {
        Self {
            selectors,
            min_chars,
        }
    }

    /// 解析试卷标题，找不到时返回空字符串
    pub fn resolve(&self, document: &Document) -> String {
        let by_selector = self.selectors.title.iter().find_map(|selector| {
            document
                .select_first(selector)
                .map(element_text)
                .filter(|title| char_len(title) > self.min_chars)
        });
        if let Some(title) = by_selector {
            return title;
        }

        debug!("标题选择器均未命中，尝试含阿拉伯字符的标题元素");
        document
            .select(&self.selectors.title_fallback)
            .map(element_text)
            .find(|text| contains_arabic(text))
            .unwrap_or_default()
    }
}
