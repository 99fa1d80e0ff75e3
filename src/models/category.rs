use phf::phf_map;
use serde::{Deserialize, Serialize};

/// 分类菜单编号 → 分类
static MENU_KEYS: phf::Map<&'static str, Category> = phf_map! {
    "1" => Category::VerbalAnalogy,
    "2" => Category::SentenceCompletion,
    "3" => Category::ReadingComprehension,
    "4" => Category::ContextualError,
    "5" => Category::OddWordOut,
};

/// 题目分类
///
/// 由调用方在解析前选定，从不根据内容推断。序列化时输出阿拉伯语名称。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 词语类比
    #[serde(rename = "التناظر اللفظي")]
    VerbalAnalogy,
    /// 句子补全
    #[serde(rename = "إكمال الجمل")]
    SentenceCompletion,
    /// 阅读理解
    #[serde(rename = "استيعاب المقروء")]
    ReadingComprehension,
    /// 语境错误
    #[serde(rename = "الخطأ السياقي")]
    ContextualError,
    /// 异类词
    #[serde(rename = "المفردة الشاذة")]
    OddWordOut,
}

impl Category {
    /// 菜单顺序
    pub const ALL: [Category; 5] = [
        Category::VerbalAnalogy,
        Category::SentenceCompletion,
        Category::ReadingComprehension,
        Category::ContextualError,
        Category::OddWordOut,
    ];

    /// 获取阿拉伯语名称
    pub fn label(self) -> &'static str {
        match self {
            Category::VerbalAnalogy => "التناظر اللفظي",
            Category::SentenceCompletion => "إكمال الجمل",
            Category::ReadingComprehension => "استيعاب المقروء",
            Category::ContextualError => "الخطأ السياقي",
            Category::OddWordOut => "المفردة الشاذة",
        }
    }

    /// 获取菜单编号
    pub fn key(self) -> &'static str {
        match self {
            Category::VerbalAnalogy => "1",
            Category::SentenceCompletion => "2",
            Category::ReadingComprehension => "3",
            Category::ContextualError => "4",
            Category::OddWordOut => "5",
        }
    }

    /// 从菜单编号解析
    pub fn from_key(key: &str) -> Option<Self> {
        MENU_KEYS.get(key.trim()).copied()
    }

    /// 从阿拉伯语名称解析（精确匹配）
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// 先按编号，再按名称解析
    pub fn parse(input: &str) -> Option<Self> {
        Self::from_key(input).or_else(|| Self::from_label(input))
    }

    /// 是否需要段落识别与相关性过滤
    pub fn is_reading_comprehension(self) -> bool {
        self == Category::ReadingComprehension
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::error::ConfigError::UnknownCategory {
            input: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_keys_cover_all_categories() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("6"), None);
    }

    #[test]
    fn test_parse_by_label() {
        assert_eq!(
            Category::parse("استيعاب المقروء"),
            Some(Category::ReadingComprehension)
        );
        assert_eq!(Category::parse(" 3 "), Some(Category::ReadingComprehension));
        assert!("reading".parse::<Category>().is_err());
    }

    #[test]
    fn test_serializes_as_arabic_label() {
        let json = serde_json::to_string(&Category::OddWordOut).unwrap();
        assert_eq!(json, "\"المفردة الشاذة\"");
    }
}
