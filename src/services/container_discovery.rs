//! 容器发现
//!
//! 主选择器（标记类名 + listitem 角色）没有结果时，退回只按 listitem 角色查找。
//! 两次都为空说明页面布局无法识别，返回空列表。

use crate::infrastructure::document::Document;
use crate::services::selectors::Selectors;
use scraper::ElementRef;
use tracing::{info, warn};

/// 按文档顺序返回所有题目容器
pub fn discover_containers<'a>(document: &'a Document, selectors: &Selectors) -> Vec<ElementRef<'a>> {
    let containers: Vec<ElementRef<'a>> = document.select(&selectors.container).collect();
    if !containers.is_empty() {
        return containers;
    }

    info!("未找到题目容器，尝试备用选择器...");
    let containers: Vec<ElementRef<'a>> = document.select(&selectors.container_fallback).collect();
    if containers.is_empty() {
        warn!("⚠️ 备用选择器也未找到题目容器，页面布局无法识别");
    }
    containers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rules::MarkupProfile;

    fn count(html: &str) -> usize {
        let selectors = Selectors::compile(&MarkupProfile::default()).unwrap();
        let document = Document::parse(html);
        discover_containers(&document, &selectors).len()
    }

    #[test]
    fn test_primary_selector() {
        let html = r#"
            <div class="Qr7Oae" role="listitem">a</div>
            <div role="listitem">ignored while primary matches</div>
            <div class="Qr7Oae" role="listitem">b</div>
        "#;
        assert_eq!(count(html), 2);
    }

    #[test]
    fn test_fallback_selector() {
        let html = r#"<div role="listitem">a</div><div role="listitem">b</div><div role="listitem">c</div>"#;
        assert_eq!(count(html), 3);
    }

    #[test]
    fn test_unrecognized_layout() {
        assert_eq!(count("<ul><li>a</li></ul>"), 0);
    }
}
