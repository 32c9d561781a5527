//! Dictionary Context - 单词词典限界上下文
//!
//! 职责:
//! - 单词条目与每日选集实体
//! - HTML 单词表提取
//! - 每日选集的随机抽样

mod entities;
mod errors;
mod extractor;
mod sampler;

pub use entities::{DailySelection, SelectedWord, WordEntry, DATE_FORMAT};
pub use errors::ExtractError;
pub use extractor::{extract_words, DEFINITION_CELL_INDEX, MIN_CELLS_PER_ROW, WORD_CELL_INDEX};
pub use sampler::{select_random, DEFAULT_DAILY_COUNT};

/// 词典集合名
pub const DICTIONARY_COLLECTION: &str = "dictionary";

/// 每日选集集合名
pub const DAILY_WORDS_COLLECTION: &str = "dailyWords";
