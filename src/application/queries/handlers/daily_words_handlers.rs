//! Daily Words Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::DocumentStorePort;
use crate::application::queries::GetDailyWords;
use crate::domain::dictionary::{DailySelection, DAILY_WORDS_COLLECTION};

/// 每日选集响应
#[derive(Debug, Clone)]
pub struct DailyWordsResponse {
    pub id: String,
    pub selection: DailySelection,
}

/// GetDailyWords Handler
///
/// dailyWords 中存在多份时（并发运行导致）取日期最新的一份，无法解析的文档跳过
pub struct GetDailyWordsHandler {
    store: Arc<dyn DocumentStorePort>,
}

impl GetDailyWordsHandler {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        _query: GetDailyWords,
    ) -> Result<Option<DailyWordsResponse>, ApplicationError> {
        let docs = self.store.list(DAILY_WORDS_COLLECTION).await?;
        if docs.len() > 1 {
            tracing::warn!(count = docs.len(), "More than one daily selection present");
        }

        let mut latest: Option<DailyWordsResponse> = None;
        for doc in docs {
            let selection: DailySelection = match doc.decode() {
                Ok(selection) => selection,
                Err(e) => {
                    tracing::warn!(id = %doc.id, error = %e, "Skipping malformed daily selection document");
                    continue;
                }
            };
            let newer = latest
                .as_ref()
                .map_or(true, |current| selection.date > current.selection.date);
            if newer {
                latest = Some(DailyWordsResponse {
                    id: doc.id,
                    selection,
                });
            }
        }

        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::application::ports::encode;
    use crate::domain::dictionary::{SelectedWord, WordEntry};
    use crate::infrastructure::memory::InMemoryDocumentStore;

    #[tokio::test]
    async fn test_empty_collection_returns_none() {
        let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new());
        let handler = GetDailyWordsHandler::new(store);
        assert!(handler.handle(GetDailyWords).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_returns_latest_selection() {
        let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new());
        let older = DailySelection::new(Vec::new(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let newer = DailySelection::new(
            vec![SelectedWord::new("w1", WordEntry::new("hello", "a greeting"))],
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        store.add(DAILY_WORDS_COLLECTION, encode(&older).unwrap()).await.unwrap();
        store.add(DAILY_WORDS_COLLECTION, encode(&newer).unwrap()).await.unwrap();

        let handler = GetDailyWordsHandler::new(store);
        let response = handler.handle(GetDailyWords).await.unwrap().unwrap();
        assert_eq!(response.selection, newer);
    }

    #[tokio::test]
    async fn test_malformed_selection_is_skipped() {
        let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new());
        let valid = DailySelection::new(Vec::new(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        store.add(DAILY_WORDS_COLLECTION, encode(&valid).unwrap()).await.unwrap();
        store
            .add(DAILY_WORDS_COLLECTION, serde_json::json!({"junk": 1}))
            .await
            .unwrap();

        let handler = GetDailyWordsHandler::new(store);
        let response = handler.handle(GetDailyWords).await.unwrap().unwrap();
        assert_eq!(response.selection, valid);
    }

    #[tokio::test]
    async fn test_only_malformed_documents_returns_none() {
        let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new());
        store
            .add(DAILY_WORDS_COLLECTION, serde_json::json!({"date": 20240301}))
            .await
            .unwrap();

        let handler = GetDailyWordsHandler::new(store);
        assert!(handler.handle(GetDailyWords).await.unwrap().is_none());
    }
}
