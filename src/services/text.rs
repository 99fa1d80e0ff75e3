//! 文本信号
//!
//! 分类器使用的纯函数：字符数、阿拉伯字符占比、句末标点数、短语匹配。
//! 长度一律按字符（而不是字节）计算。

/// 阿拉伯语 Unicode 区块
const ARABIC_BLOCK: std::ops::RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

pub fn is_arabic(c: char) -> bool {
    ARABIC_BLOCK.contains(&c)
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// 是否含有阿拉伯字符
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic)
}

/// 阿拉伯字符占全部字符的比例，空文本为 0
pub fn arabic_ratio(text: &str) -> f64 {
    let total = char_len(text);
    if total == 0 {
        return 0.0;
    }
    let arabic = text.chars().filter(|c| is_arabic(*c)).count();
    arabic as f64 / total as f64
}

/// 句末标点数量
pub fn count_terminators(text: &str, terminators: &[char]) -> usize {
    text.chars().filter(|c| terminators.contains(c)).count()
}

/// 返回文本中出现的第一个短语
pub fn find_phrase<'a>(text: &str, phrases: &'a [String]) -> Option<&'a str> {
    phrases
        .iter()
        .map(String::as_str)
        .find(|phrase| !phrase.is_empty() && text.contains(phrase))
}

/// 返回文本开头匹配的第一个短语
pub fn find_prefix<'a>(text: &str, prefixes: &'a [String]) -> Option<&'a str> {
    prefixes
        .iter()
        .map(String::as_str)
        .find(|prefix| !prefix.is_empty() && text.starts_with(prefix))
}

/// 去掉末尾的冒号和空白，用于表单字段的精确比较
pub fn strip_field_suffix(text: &str) -> &str {
    text.trim().trim_end_matches([':', '：']).trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_ratio() {
        assert_eq!(arabic_ratio(""), 0.0);
        assert_eq!(arabic_ratio("abcd"), 0.0);
        assert_eq!(arabic_ratio("سلام"), 1.0);
        // 两个阿拉伯字符 + 一个空格 + 一个拉丁字符
        assert!((arabic_ratio("لا a") - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_count_terminators() {
        let terminators = ['.', '؟', '!'];
        assert_eq!(count_terminators("جملة. جملة؟ جملة!", &terminators), 3);
        assert_eq!(count_terminators("بدون علامات", &terminators), 0);
    }

    #[test]
    fn test_phrase_matching() {
        let phrases = vec!["حسب النص".to_string(), String::new()];
        assert_eq!(find_phrase("ما الفكرة حسب النص؟", &phrases), Some("حسب النص"));
        assert_eq!(find_phrase("نص عادي", &phrases), None);

        let prefixes = vec!["اختر".to_string()];
        assert_eq!(find_prefix("اختر الإجابة", &prefixes), Some("اختر"));
        assert_eq!(find_prefix("لم يختر", &prefixes), None);
    }

    #[test]
    fn test_strip_field_suffix() {
        assert_eq!(strip_field_suffix("اسم الطالب :"), "اسم الطالب");
        assert_eq!(strip_field_suffix("كلمة المرور:"), "كلمة المرور");
        assert_eq!(strip_field_suffix("الاختبار"), "الاختبار");
    }
}
