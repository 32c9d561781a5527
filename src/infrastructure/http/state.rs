//! Application State
//!
//! 进程启动时构建一次，之后以只读句柄共享给各入口

use std::sync::Arc;

use crate::application::{
    DocumentStorePort, GetDailyWordsHandler, PageFetcherPort, SelectDailyWordsHandler,
    UpdateDictionaryHandler,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub store: Arc<dyn DocumentStorePort>,

    // ========== Command Handlers ==========
    pub update_dictionary_handler: Arc<UpdateDictionaryHandler>,
    pub select_daily_words_handler: Arc<SelectDailyWordsHandler>,

    // ========== Query Handlers ==========
    pub get_daily_words_handler: GetDailyWordsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(fetcher: Arc<dyn PageFetcherPort>, store: Arc<dyn DocumentStorePort>) -> Self {
        Self {
            store: store.clone(),

            update_dictionary_handler: Arc::new(UpdateDictionaryHandler::new(
                fetcher,
                store.clone(),
            )),
            select_daily_words_handler: Arc::new(SelectDailyWordsHandler::new(store.clone())),

            get_daily_words_handler: GetDailyWordsHandler::new(store),
        }
    }
}
