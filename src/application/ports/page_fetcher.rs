//! Page Fetcher Port - 源页面抓取抽象
//!
//! 定义单页面抓取的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Failed to read body: {0}")]
    Body(String),
}

/// Page Fetcher Port
///
/// 对固定 URL 发起一次 GET，返回文档正文。不重试、不缓存
#[async_trait]
pub trait PageFetcherPort: Send + Sync {
    async fn fetch(&self) -> Result<String, FetchError>;

    /// 目标 URL（用于日志）
    fn url(&self) -> &str;
}
