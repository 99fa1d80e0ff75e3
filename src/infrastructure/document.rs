//! 文档加载器 - 基础设施层
//!
//! 持有解析后的元素树，只暴露"查询"的能力

use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

/// 解析后的 HTML 文档
///
/// 职责：
/// - 持有唯一的元素树
/// - 暴露 select() / select_first() 能力
/// - 不认识题目 / 段落
pub struct Document {
    html: Html,
}

impl Document {
    /// 宽松模式解析 HTML
    ///
    /// 导出页面经常是不规范的 HTML，解析器会自动补全缺失的标签；
    /// 完全无法识别的输入得到的是一棵空树，而不是错误。
    pub fn parse(html_content: &str) -> Self {
        let html = Html::parse_document(html_content);
        if !html.errors.is_empty() {
            tracing::debug!("HTML 解析容错 {} 处", html.errors.len());
        }
        Self { html }
    }

    /// 查询所有匹配的元素（文档顺序）
    ///
    /// 返回的元素只借用文档，选择器只需在迭代期间存活。
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    /// 查询第一个匹配的元素
    pub fn select_first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.html.select(selector).next()
    }
}

/// 元素的全部文本（拼接所有后代文本节点后去除首尾空白）
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// 在元素内查找第一个匹配的后代，返回其文本
pub fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let doc = Document::parse("<div role='listitem'><span class='M7eMe'>سؤال<div>");
        let selector = Selector::parse(".M7eMe").unwrap();
        let text = doc.select_first(&selector).map(element_text);
        assert_eq!(text.as_deref(), Some("سؤال"));
    }

    #[test]
    fn test_garbage_input_has_no_elements() {
        let doc = Document::parse("\u{0}\u{1}not html at all <<<>>>");
        let selector = Selector::parse("[role=\"listitem\"]").unwrap();
        assert_eq!(doc.select(&selector).count(), 0);
    }

    #[test]
    fn test_elements_outlive_selector() {
        let doc = Document::parse("<p class='a'>أ</p><p class='a'>ب</p>");
        let found: Vec<ElementRef<'_>> = {
            let selector = Selector::parse(".a").unwrap();
            doc.select(&selector).collect()
        };
        let texts: Vec<String> = found.into_iter().map(element_text).collect();
        assert_eq!(texts, vec!["أ", "ب"]);
    }

    #[test]
    fn test_first_text_skips_empty() {
        let doc = Document::parse("<div id='c'><span class='t'>   </span></div>");
        let container = Selector::parse("#c").unwrap();
        let text = Selector::parse(".t").unwrap();
        let el = doc.select_first(&container).unwrap();
        assert_eq!(first_text(el, &text), None);
    }
}
