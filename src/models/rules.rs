//! 启发式规则表
//!
//! 所有关键词列表、阈值以及页面标记类名都以数据形式存放在这里，
//! 新的页面变体只需要修改规则表（或提供 TOML 覆盖文件），不需要改动分类逻辑。

use crate::error::{AppResult, ConfigError};
use serde::{Deserialize, Serialize};

/// 页面生成器使用的标记（CSS 选择器）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupProfile {
    /// 标题选择器，按优先级排列
    pub title_selectors: Vec<String>,
    /// 标题兜底：带 heading 角色的标题元素
    pub title_fallback_selector: String,
    /// 题目容器（主选择器）
    pub container_selector: String,
    /// 题目容器（宽松的兜底选择器）
    pub container_fallback_selector: String,
    /// 题干/段落文本选择器，按优先级排列，第一个为主选择器
    pub text_selectors: Vec<String>,
    /// 选项组
    pub radio_group_selector: String,
    /// 选项标签
    pub label_selector: String,
    /// 选项显示文本
    pub choice_text_selector: String,
    /// "正确答案"区块
    pub correct_section_selector: String,
    /// 选项内的正确答案标记
    pub correct_marker_selector: String,
}

impl Default for MarkupProfile {
    fn default() -> Self {
        Self {
            title_selectors: strings(&[
                "h1",
                "[role=\"heading\"]",
                ".freebirdFormviewerViewHeaderTitle",
                ".M7eMe",
            ]),
            title_fallback_selector:
                "h1[role=\"heading\"], h2[role=\"heading\"], h3[role=\"heading\"]".to_string(),
            container_selector: "div.Qr7Oae[role=\"listitem\"]".to_string(),
            container_fallback_selector: "div[role=\"listitem\"]".to_string(),
            text_selectors: strings(&[
                ".M7eMe",
                "[role=\"heading\"]",
                ".spb5Rd",
                "div[dir=\"auto\"]",
            ]),
            radio_group_selector: "[role=\"radiogroup\"]".to_string(),
            label_selector: "label".to_string(),
            choice_text_selector: ".aDTYNe".to_string(),
            correct_section_selector: ".D42QGf".to_string(),
            correct_marker_selector: "div.H6Scae".to_string(),
        }
    }
}

/// 分类规则
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub markup: MarkupProfile,

    /// 标题最短长度（不含），字符数
    pub min_title_chars: usize,

    // --- 段落识别 ---
    pub min_passage_chars: usize,
    pub min_passage_terminators: usize,
    pub min_passage_arabic_ratio: f64,
    /// 句末标点
    pub sentence_terminators: Vec<char>,
    /// 以这些词开头的文本是题目而不是段落
    pub question_openers: Vec<String>,
    /// "根据文章"一类的指代短语：出现即说明是关于段落的题目
    pub passage_references: Vec<String>,

    // --- 题目识别 ---
    pub min_question_chars: usize,
    pub min_question_arabic_ratio: f64,
    /// 超过该长度且没有疑问标记的文本视为散文
    pub max_unmarked_question_chars: usize,
    /// 表单字段（精确匹配，去掉末尾冒号后比较）
    pub metadata_fields: Vec<String>,
    /// 表单字段标记（包含即拒绝）
    pub metadata_markers: Vec<String>,
    /// 疑问/祈使标记（包含即接受）
    pub question_markers: Vec<String>,

    // --- 阅读理解相关性 ---
    pub generic_interrogatives: Vec<String>,
    pub min_related_question_chars: usize,

    // --- 正确答案 ---
    pub correct_answer_phrase: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            markup: MarkupProfile::default(),
            min_title_chars: 5,
            min_passage_chars: 30,
            min_passage_terminators: 2,
            min_passage_arabic_ratio: 0.3,
            sentence_terminators: vec!['.', '؟', '!'],
            question_openers: strings(&[
                "اختر", "اختاري", "ما ", "ماذا", "لماذا", "كيف", "متى", "أين", "هل", "؟", "?",
            ]),
            passage_references: strings(&[
                "حسب النص",
                "بحسب النص",
                "وفق النص",
                "وفقا للنص",
                "وفقاً للنص",
                "طبقا للنص",
                "يشير النص",
                "يدل النص",
                "يفهم من النص",
                "نفهم من النص",
                "ورد في النص",
                "النص السابق",
                "الفقرة",
                "عنوان مناسب",
            ]),
            min_question_chars: 5,
            min_question_arabic_ratio: 0.5,
            max_unmarked_question_chars: 100,
            metadata_fields: strings(&["اسم الطالب", "كلمة المرور", "الاختبار"]),
            metadata_markers: strings(&[
                "اسم الطالب",
                "اسم الطالبة",
                "كلمة المرور",
                "كلمة السر",
                "اسم الاختبار",
                "الدرجة",
                "التاريخ",
                "مدة الاختبار",
                "زمن الاختبار",
                "الصف الدراسي",
                "المرحلة الدراسية",
            ]),
            question_markers: strings(&[
                "؟", "?", "اختر", "ما ", "ماذا", "لماذا", "كيف", "متى", "أين", "هل", "أي ",
                "مرادف", "مضاد", "معنى", "أكمل", "الفراغ", "الخطأ", "الشاذة", "العلاقة",
            ]),
            generic_interrogatives: strings(&[
                "ما ", "ماذا", "لماذا", "كيف", "متى", "أين", "هل", "؟", "?",
            ]),
            min_related_question_chars: 20,
            correct_answer_phrase: "إجابة صحيحة".to_string(),
        }
    }
}

impl RuleSet {
    /// 从 TOML 文本加载，未给出的字段使用默认值
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 检查阈值是否合理
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("min_passage_arabic_ratio", self.min_passage_arabic_ratio),
            ("min_question_arabic_ratio", self.min_question_arabic_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RatioOutOfRange {
                    field: field.to_string(),
                    value,
                }
                .into());
            }
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
