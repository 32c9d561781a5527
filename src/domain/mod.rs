//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Dictionary Context: 单词抓取与每日选集

pub mod dictionary;

pub use dictionary::{extract_words, select_random, DailySelection, SelectedWord, WordEntry};
