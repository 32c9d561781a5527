//! Dictionary Context - Entities

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 日期格式（YYYY-MM-DD）
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 单词条目 - 表格中的一行
///
/// 不做唯一性约束，多次抓取会重复累积
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub definition: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

/// 被选中的单词（选取时按值拷贝，附带 dictionary 中的文档 ID）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedWord {
    pub id: String,
    pub word: String,
    pub definition: String,
}

impl SelectedWord {
    pub fn new(id: impl Into<String>, entry: WordEntry) -> Self {
        Self {
            id: id.into(),
            word: entry.word,
            definition: entry.definition,
        }
    }
}

/// 每日单词选集
///
/// dailyWords 集合中期望只存在一份
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySelection {
    pub words: Vec<SelectedWord>,
    /// YYYY-MM-DD
    pub date: String,
}

impl DailySelection {
    pub fn new(words: Vec<SelectedWord>, date: NaiveDate) -> Self {
        Self {
            words,
            date: date.format(DATE_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_selection_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let selection = DailySelection::new(Vec::new(), date);
        assert_eq!(selection.date, "2024-03-07");
    }

    #[test]
    fn test_selected_word_document_shape() {
        let word = SelectedWord::new("abc", WordEntry::new("hello", "a greeting"));
        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "abc", "word": "hello", "definition": "a greeting"})
        );
    }
}
