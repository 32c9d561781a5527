//! SelectDailyWords Handler - 读取全部 → 清空 dailyWords → 抽样 → 写入一份

use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::application::commands::SelectDailyWords;
use crate::application::error::ApplicationError;
use crate::application::ports::{encode, DocumentStorePort};
use crate::domain::dictionary::{
    select_random, DailySelection, SelectedWord, WordEntry, DAILY_WORDS_COLLECTION,
    DICTIONARY_COLLECTION,
};

/// 每日选集响应
#[derive(Debug, Clone)]
pub struct SelectDailyWordsResponse {
    /// 新选集的文档 ID
    pub id: String,
    pub selection: DailySelection,
    /// 清除的旧选集数
    pub cleared: usize,
}

/// SelectDailyWords Handler
///
/// 删除与写入之间没有原子性，中途失败会让 dailyWords 为空直到下次成功运行
pub struct SelectDailyWordsHandler {
    store: Arc<dyn DocumentStorePort>,
}

impl SelectDailyWordsHandler {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: SelectDailyWords,
    ) -> Result<SelectDailyWordsResponse, ApplicationError> {
        self.handle_on(command, Utc::now().date_naive()).await
    }

    /// 以指定日期生成选集
    pub async fn handle_on(
        &self,
        command: SelectDailyWords,
        date: NaiveDate,
    ) -> Result<SelectDailyWordsResponse, ApplicationError> {
        // 1. 读取全部单词
        let all_words: Vec<SelectedWord> = self
            .store
            .list(DICTIONARY_COLLECTION)
            .await?
            .into_iter()
            .filter_map(|doc| match doc.decode::<WordEntry>() {
                Ok(entry) => Some(SelectedWord::new(doc.id, entry)),
                Err(e) => {
                    tracing::warn!(id = %doc.id, error = %e, "Skipping malformed dictionary document");
                    None
                }
            })
            .collect();

        // 2. 清空 dailyWords
        let stale: Vec<String> = self
            .store
            .list(DAILY_WORDS_COLLECTION)
            .await?
            .into_iter()
            .map(|doc| doc.id)
            .collect();
        let cleared = super::delete_all(&self.store, DAILY_WORDS_COLLECTION, stale).await?;

        tracing::info!(cleared = cleared, "Old daily words removed");

        // 3. 抽样
        let population = all_words.len();
        let words = select_random(all_words, command.count, &mut rand::thread_rng());

        // 4. 写入新选集
        let selection = DailySelection::new(words, date);
        let data = encode(&selection).map_err(ApplicationError::write)?;
        let id = self
            .store
            .add(DAILY_WORDS_COLLECTION, data)
            .await
            .map_err(ApplicationError::write)?;

        tracing::info!(
            id = %id,
            selected = selection.words.len(),
            population = population,
            date = %selection.date,
            "Daily words selected"
        );

        Ok(SelectDailyWordsResponse {
            id,
            selection,
            cleared,
        })
    }
}
