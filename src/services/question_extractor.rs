//! 题目提取服务 - 业务能力层
//!
//! 只负责"从一个已解析的 HTML 文档中提取题目"，不关心文件读写

use crate::models::question::QuestionRecord;
use crate::utils::logging::truncate_text;
use anyhow::{anyhow, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use tracing::debug;

/// 题目块
const QUESTION_BLOCK: &str = ".questionLi";
/// 题干
const STEM: &str = "h3.mark_name";
/// 选项列表
const OPTION_LIST: &str = "ul.mark_letter";
/// 正确答案
const ANSWER: &str = "span.rightAnswerContent";

/// 题号 + 可选题型标注，如 `1.(单选题)`、`3. (单选题, 2.0 分)`、`1.(single choice)`
const STEM_PATTERN: &str = r"(?s)^\d+\.?\s*(?:[(（]\s*(?i:单选题|多选题|判断题|single choice|multiple choice|true or false)\s*(?:[,，][^)）]*)?[)）])?(.*)$";
/// 选项字母 + 可选句点
const OPTION_PATTERN: &str = r"(?s)^([A-D])\.?\s*(.*)$";

/// 题目提取服务
///
/// 职责：
/// - 按 class 标记定位题目块、题干、选项和答案
/// - 缺失题干时跳过该题；缺失选项或答案时使用空值
/// - 单个题目块从不返回错误
pub struct QuestionExtractor {
    block_selector: Selector,
    stem_selector: Selector,
    option_list_selector: Selector,
    answer_selector: Selector,
    stem_re: Regex,
    option_re: Regex,
}

impl QuestionExtractor {
    /// 创建提取服务，预编译选择器与正则
    pub fn new() -> Result<Self> {
        Ok(Self {
            block_selector: parse_selector(QUESTION_BLOCK)?,
            stem_selector: parse_selector(STEM)?,
            option_list_selector: parse_selector(OPTION_LIST)?,
            answer_selector: parse_selector(ANSWER)?,
            stem_re: Regex::new(STEM_PATTERN)?,
            option_re: Regex::new(OPTION_PATTERN)?,
        })
    }

    /// 按文档顺序提取所有可识别的题目
    pub fn extract(&self, document: &Html) -> Vec<QuestionRecord> {
        document
            .select(&self.block_selector)
            .enumerate()
            .filter_map(|(idx, block)| {
                let record = self.extract_block(block);
                if record.is_none() {
                    debug!("第 {} 个题目块缺少题干，已跳过", idx + 1);
                }
                record
            })
            .collect()
    }

    /// 提取并格式化，每道题一个字符串
    pub fn extract_formatted(&self, document: &Html, answer_prefix: &str) -> Vec<String> {
        self.extract(document)
            .iter()
            .map(|record| record.format(answer_prefix))
            .collect()
    }

    /// 解析 HTML 文本并提取
    pub fn extract_from_html(&self, html: &str) -> Vec<QuestionRecord> {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    /// 提取单个题目块；只有缺少题干时返回 `None`
    pub fn extract_block(&self, block: ElementRef) -> Option<QuestionRecord> {
        let stem_node = block.select(&self.stem_selector).next()?;
        let stem = self.clean_stem(&joined_text(stem_node));

        let options = block
            .select(&self.option_list_selector)
            .next()
            .map(|list| self.collect_options(list))
            .unwrap_or_default();

        let answer = block
            .select(&self.answer_selector)
            .next()
            .map(joined_text)
            .unwrap_or_default();

        debug!(
            "题干: {} | 选项数: {} | 答案: {}",
            truncate_text(&stem, 40),
            options.len(),
            answer
        );

        Some(QuestionRecord {
            stem,
            options,
            answer,
        })
    }

    /// 去掉题号与题型标注；不匹配时原样返回
    pub fn clean_stem(&self, raw: &str) -> String {
        match self.stem_re.captures(raw) {
            Some(caps) => caps
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            None => raw.to_string(),
        }
    }

    /// 拆分选项字母与内容；内容为空时返回 `None`
    pub fn parse_option(&self, raw: &str) -> Option<(char, String)> {
        let caps = self.option_re.captures(raw)?;
        let label = caps.get(1)?.as_str().chars().next()?;
        let text = caps.get(2)?.as_str().trim();
        if text.is_empty() {
            return None;
        }
        Some((label, text.to_string()))
    }

    /// 遍历选项列表的直接 `li` 子元素，重复字母以后出现的为准
    fn collect_options(&self, list: ElementRef) -> BTreeMap<char, String> {
        let mut options = BTreeMap::new();
        for item in list
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "li")
        {
            if let Some((label, text)) = self.parse_option(&joined_text(item)) {
                options.insert(label, text);
            }
        }
        options
    }
}

/// 拼接元素内所有去除首尾空白后的非空文本片段，不加分隔符
fn joined_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("无效的选择器 {}: {}", selector, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> QuestionExtractor {
        QuestionExtractor::new().unwrap()
    }

    fn block(stem: &str, options: &[&str], answer: Option<&str>) -> String {
        let items: String = options
            .iter()
            .map(|o| format!("<li><span>{}</span></li>", o))
            .collect();
        let answer = answer
            .map(|a| {
                format!(
                    "<div class=\"mark_answer\"><span class=\"rightAnswerContent\">{}</span></div>",
                    a
                )
            })
            .unwrap_or_default();
        format!(
            "<div class=\"questionLi\"><h3 class=\"mark_name\">{}</h3><ul class=\"mark_letter\">{}</ul>{}</div>",
            stem, items, answer
        )
    }

    fn page(blocks: &[String]) -> String {
        format!("<html><body>{}</body></html>", blocks.concat())
    }

    #[test]
    fn test_clean_stem_strips_number_and_type() {
        let ex = extractor();
        assert_eq!(ex.clean_stem("1.(single choice) What is 2+2?"), "What is 2+2?");
        assert_eq!(ex.clean_stem("2.(单选题)下列说法正确的是"), "下列说法正确的是");
        assert_eq!(ex.clean_stem("3. (单选题, 2.0 分) 中国的首都是"), "中国的首都是");
        assert_eq!(ex.clean_stem("10 plain numbered"), "plain numbered");
    }

    #[test]
    fn test_clean_stem_falls_back_to_raw() {
        let ex = extractor();
        assert_eq!(ex.clean_stem("What is 2+2?"), "What is 2+2?");
        assert_eq!(ex.clean_stem("(单选题) 无题号"), "(单选题) 无题号");
    }

    #[test]
    fn test_clean_stem_keeps_unknown_brackets() {
        let ex = extractor();
        assert_eq!(ex.clean_stem("4.(x+1)=3, x=?"), "(x+1)=3, x=?");
    }

    #[test]
    fn test_parse_option() {
        let ex = extractor();
        assert_eq!(ex.parse_option("A. 3"), Some(('A', "3".to_string())));
        assert_eq!(ex.parse_option("B北京"), Some(('B', "北京".to_string())));
        assert_eq!(ex.parse_option("C."), None);
        assert_eq!(ex.parse_option("D.   "), None);
        assert_eq!(ex.parse_option("E. out of range"), None);
        assert_eq!(ex.parse_option(""), None);
    }

    #[test]
    fn test_scenario_single_choice() {
        let html = page(&[block(
            "<span>1.</span><span>(single choice)</span> What is 2+2?",
            &["A. 3", "B. 4", "C."],
            Some("B"),
        )]);
        let ex = extractor();
        let document = Html::parse_document(&html);
        let formatted = ex.extract_formatted(&document, "answer: ");
        assert_eq!(formatted, vec!["What is 2+2?\nA. 3\nB. 4\nanswer: B\n".to_string()]);
    }

    #[test]
    fn test_options_sorted_regardless_of_source_order() {
        let html = page(&[block("1. Order", &["C. c", "A. a", "B. b"], Some("A"))]);
        let records = extractor().extract_from_html(&html);
        let labels: Vec<char> = records[0].options.keys().copied().collect();
        assert_eq!(labels, vec!['A', 'B', 'C']);
    }

    #[test]
    fn test_duplicate_label_later_wins() {
        let html = page(&[block("1. Dup", &["A. first", "A. second"], None)]);
        let records = extractor().extract_from_html(&html);
        assert_eq!(records[0].options.get(&'A').map(String::as_str), Some("second"));
        assert_eq!(records[0].options.len(), 1);
    }

    #[test]
    fn test_missing_answer_gives_empty_line() {
        let html = page(&[block("1. No answer here", &["A. yes"], None)]);
        let records = extractor().extract_from_html(&html);
        assert_eq!(records[0].answer, "");
        assert_eq!(records[0].to_string(), "No answer here\nA. yes\nanswer: \n");
    }

    #[test]
    fn test_block_without_stem_is_skipped() {
        let html = page(&[
            "<div class=\"questionLi\"><ul class=\"mark_letter\"><li>A. orphan</li></ul></div>"
                .to_string(),
            block("2. Kept", &[], None),
        ]);
        let records = extractor().extract_from_html(&html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].stem, "Kept");
        assert!(records[0].options.is_empty());
    }

    #[test]
    fn test_no_blocks_yields_empty() {
        let records = extractor().extract_from_html("<html><body><p>unrelated</p></body></html>");
        assert!(records.is_empty());
    }

    #[test]
    fn test_only_direct_list_items_are_options() {
        let html = page(&["<div class=\"questionLi\"><h3 class=\"mark_name\">1. Nested</h3>\
             <ul class=\"mark_letter\"><li>A. top<ul><li>B. nested</li></ul></li><li>C. other</li></ul></div>"
            .to_string()]);
        let records = extractor().extract_from_html(&html);
        let options = &records[0].options;
        assert_eq!(options.get(&'A').map(String::as_str), Some("topB. nested"));
        assert!(!options.contains_key(&'B'));
        assert_eq!(options.get(&'C').map(String::as_str), Some("other"));
    }

    #[test]
    fn test_answer_found_at_any_depth() {
        let html = page(&["<div class=\"questionLi\"><h3 class=\"mark_name\">1. Deep</h3>\
             <div><div><p>正确答案:<span class=\"rightAnswerContent\"> C </span></p></div></div></div>"
            .to_string()]);
        let records = extractor().extract_from_html(&html);
        assert_eq!(records[0].answer, "C");
    }

    #[test]
    fn test_whitespace_fragments_joined_without_separator() {
        let html = page(&[block(
            "\n  <span>5.</span>\n  <span>Hello</span>\n  <span>world</span>\n",
            &["<i>A</i>. <b>x</b>"],
            Some("A"),
        )]);
        let records = extractor().extract_from_html(&html);
        assert_eq!(records[0].stem, "Helloworld");
        assert_eq!(records[0].options.get(&'A').map(String::as_str), Some("x"));
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let html = "<div class=\"questionLi\"><h3 class=\"mark_name\">1. Broken<ul class=\"mark_letter\"><li>A. one<li>B. two";
        let records = extractor().extract_from_html(html);
        assert_eq!(records.len(), 1);
    }
}
