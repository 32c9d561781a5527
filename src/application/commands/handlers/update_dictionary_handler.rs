//! UpdateDictionary Handler - 抓取 → 提取 → 批量写入

use std::sync::Arc;

use crate::application::commands::UpdateDictionary;
use crate::application::error::ApplicationError;
use crate::application::ports::{encode, DocumentStorePort, PageFetcherPort};
use crate::domain::dictionary::{extract_words, DICTIONARY_COLLECTION};

/// 更新词典响应
#[derive(Debug, Clone)]
pub struct UpdateDictionaryResponse {
    /// 本次写入的条目数
    pub written: usize,
}

/// UpdateDictionary Handler
///
/// 不去重：同一页面抓取两次会写入两份完整数据
pub struct UpdateDictionaryHandler {
    fetcher: Arc<dyn PageFetcherPort>,
    store: Arc<dyn DocumentStorePort>,
}

impl UpdateDictionaryHandler {
    pub fn new(fetcher: Arc<dyn PageFetcherPort>, store: Arc<dyn DocumentStorePort>) -> Self {
        Self { fetcher, store }
    }

    pub async fn handle(
        &self,
        _command: UpdateDictionary,
    ) -> Result<UpdateDictionaryResponse, ApplicationError> {
        let html = self.fetcher.fetch().await?;
        tracing::debug!(url = %self.fetcher.url(), bytes = html.len(), "Source page fetched");

        let words = extract_words(&html)?;
        tracing::info!(count = words.len(), "Words extracted");

        let documents = words
            .iter()
            .map(encode)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ApplicationError::write)?;

        let ids = super::add_all(&self.store, DICTIONARY_COLLECTION, documents).await?;

        tracing::info!(written = ids.len(), "Dictionary updated");

        Ok(UpdateDictionaryResponse { written: ids.len() })
    }
}
