//! Dictionary Commands

use crate::domain::dictionary::DEFAULT_DAILY_COUNT;

/// 抓取源页面并写入 dictionary
#[derive(Debug, Clone, Default)]
pub struct UpdateDictionary;

/// 重新生成每日选集
#[derive(Debug, Clone)]
pub struct SelectDailyWords {
    /// 选取数量
    pub count: usize,
}

impl Default for SelectDailyWords {
    fn default() -> Self {
        Self {
            count: DEFAULT_DAILY_COUNT,
        }
    }
}
