//! HTTP Page Fetcher - 抓取源页面
//!
//! 实现 PageFetcherPort trait，对固定 URL 发起一次 GET
//!
//! 默认源页面:
//! GET https://skyeng.ru/articles/samye-populyarnye-slova-v-anglijskom-yazyke/
//! Response: text/html

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{FetchError, PageFetcherPort};

/// 默认源页面 URL
pub const DEFAULT_SOURCE_URL: &str =
    "https://skyeng.ru/articles/samye-populyarnye-slova-v-anglijskom-yazyke/";

/// HTTP Page Fetcher 配置
#[derive(Debug, Clone)]
pub struct HttpPageFetcherConfig {
    /// 源页面 URL
    pub url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpPageFetcherConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpPageFetcherConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Page Fetcher
///
/// 不重试，重定向交给 reqwest 默认策略
pub struct HttpPageFetcher {
    client: Client,
    config: HttpPageFetcherConfig,
}

impl HttpPageFetcher {
    pub fn new(config: HttpPageFetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl PageFetcherPort for HttpPageFetcher {
    async fn fetch(&self) -> Result<String, FetchError> {
        tracing::debug!(url = %self.config.url, "Fetching source page");

        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else if e.is_connect() {
                    FetchError::Network(format!("Cannot connect to source: {}", e))
                } else {
                    FetchError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        tracing::info!(
            url = %self.config.url,
            status = status.as_u16(),
            bytes = body.len(),
            "Source page fetched"
        );

        Ok(body)
    }

    fn url(&self) -> &str {
        &self.config.url
    }
}
