use crate::models::category::Category;
use serde::{Deserialize, Serialize};

/// 题型，导出页面中只有单选题
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    #[default]
    #[serde(rename = "اختيار")]
    MultipleChoice,
}

/// 一道提取出的题目
///
/// 字段顺序即输出 JSON 的字段顺序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question_number: usize,
    pub question: String,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub choices: Vec<String>,
    /// 未找到正确答案标记时为空字符串
    #[serde(default)]
    pub answer: String,
    /// 试卷标题
    #[serde(default)]
    pub exam: String,
    pub category: Category,
    /// 仅阅读理解且已捕获段落时存在
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub passage: Option<String>,
}

impl QuestionRecord {
    /// 答案非空且选项非空时，答案必须是选项之一
    pub fn answer_matches_choices(&self) -> bool {
        self.answer.is_empty() || self.choices.is_empty() || self.choices.contains(&self.answer)
    }
}

/// 数据质量警告：答案不在选项中
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataWarning {
    pub question_number: usize,
    pub question: String,
    pub answer: String,
}

impl std::fmt::Display for DataWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "题目 {} | 答案 '{}' 不在选项中 | 题干: {}",
            self.question_number, self.answer, self.question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> QuestionRecord {
        QuestionRecord {
            question_number: 1,
            question: "ما مرادف كلمة سعيد؟".to_string(),
            question_type: QuestionType::MultipleChoice,
            choices: vec!["فرح".to_string(), "حزين".to_string()],
            answer: "فرح".to_string(),
            exam: "اختبار اللفظي".to_string(),
            category: Category::VerbalAnalogy,
            passage: None,
        }
    }

    #[test]
    fn test_field_names_and_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let keys: Vec<&str> = [
            "question_number",
            "question",
            "type",
            "choices",
            "answer",
            "exam",
            "category",
        ]
        .to_vec();
        let mut last = 0;
        for key in keys {
            let pos = json.find(&format!("\"{}\"", key)).unwrap();
            assert!(pos >= last, "字段 {} 顺序错误", key);
            last = pos;
        }
        assert!(!json.contains("passage"));

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "اختيار");
    }

    #[test]
    fn test_answer_consistency() {
        let mut record = sample();
        assert!(record.answer_matches_choices());

        record.answer = String::new();
        assert!(record.answer_matches_choices());

        record.answer = "غاضب".to_string();
        assert!(!record.answer_matches_choices());

        record.choices.clear();
        assert!(record.answer_matches_choices());
    }

    #[test]
    fn test_missing_type_defaults_to_multiple_choice() {
        let record: QuestionRecord = serde_json::from_str(
            r#"{"question_number": 2, "question": "س", "exam": "", "category": "المفردة الشاذة"}"#,
        )
        .unwrap();
        assert_eq!(record.question_type, QuestionType::MultipleChoice);
        assert_eq!(QuestionType::default(), QuestionType::MultipleChoice);
    }
}
