//! Fake Page Fetcher - 用于测试的页面抓取器
//!
//! 始终返回固定的正文（或固定的错误），不发起网络请求

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{FetchError, PageFetcherPort};

/// Fake Page Fetcher
pub struct FakePageFetcher {
    response: Result<String, FetchError>,
    calls: AtomicUsize,
}

impl FakePageFetcher {
    /// 始终返回给定正文
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            response: Ok(body.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// 始终返回给定错误
    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// 已调用次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcherPort for FakePageFetcher {
    async fn fetch(&self) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("FakePageFetcher: returning fixed response");
        self.response.clone()
    }

    fn url(&self) -> &str {
        "fake://source"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_calls() {
        let fetcher = FakePageFetcher::with_body("<p></p>");
        fetcher.fetch().await.unwrap();
        fetcher.fetch().await.unwrap();
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn test_failing_repeats_error() {
        let fetcher = FakePageFetcher::failing(FetchError::Status(404));
        assert!(matches!(fetcher.fetch().await, Err(FetchError::Status(404))));
        assert!(matches!(fetcher.fetch().await, Err(FetchError::Status(404))));
    }
}
