//! Daily Words Queries

/// 获取当前每日选集
#[derive(Debug, Clone)]
pub struct GetDailyWords;
