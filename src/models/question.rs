use std::collections::BTreeMap;
use std::fmt;

/// 默认答案行前缀
pub const DEFAULT_ANSWER_PREFIX: &str = "answer: ";

/// 从单个题目块中提取出的题目
///
/// `options` 以字母为键，按字母顺序输出；值均为非空文本。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionRecord {
    pub stem: String,
    pub options: BTreeMap<char, String>,
    pub answer: String,
}

impl QuestionRecord {
    /// 格式化为输出文本，每行以换行结尾
    ///
    /// ```text
    /// 题干
    /// A. 选项
    /// B. 选项
    /// answer: B
    /// ```
    pub fn format(&self, answer_prefix: &str) -> String {
        let mut formatted = String::with_capacity(self.stem.len() + 64);
        formatted.push_str(&self.stem);
        formatted.push('\n');
        for (label, text) in &self.options {
            formatted.push_str(&format!("{}. {}\n", label, text));
        }
        formatted.push_str(answer_prefix);
        formatted.push_str(&self.answer);
        formatted.push('\n');
        formatted
    }
}

impl fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_ANSWER_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_sorted_by_label() {
        let mut record = QuestionRecord {
            stem: "Pick one".to_string(),
            answer: "A".to_string(),
            ..Default::default()
        };
        record.options.insert('C', "third".to_string());
        record.options.insert('A', "first".to_string());
        record.options.insert('B', "second".to_string());

        assert_eq!(
            record.to_string(),
            "Pick one\nA. first\nB. second\nC. third\nanswer: A\n"
        );
    }

    #[test]
    fn test_empty_answer_keeps_line() {
        let record = QuestionRecord {
            stem: "No answer".to_string(),
            ..Default::default()
        };
        assert_eq!(record.to_string(), "No answer\nanswer: \n");
    }

    #[test]
    fn test_custom_prefix() {
        let record = QuestionRecord {
            stem: "题干".to_string(),
            answer: "D".to_string(),
            ..Default::default()
        };
        assert_eq!(record.format("答案："), "题干\n答案：D\n");
    }
}
