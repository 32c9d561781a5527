//! 批量并发写入/删除
//!
//! 每个文档一个独立任务，全部完成后汇总第一个错误。
//! 不是事务：失败时已成功的写入保留，并发读者可见部分结果

use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::application::error::ApplicationError;
use crate::application::ports::{DocumentStorePort, StoreError};

async fn join_all<T>(
    mut set: JoinSet<Result<T, StoreError>>,
) -> Result<Vec<T>, ApplicationError>
where
    T: Send + 'static,
{
    let mut succeeded = Vec::with_capacity(set.len());
    let mut first_error: Option<ApplicationError> = None;
    let mut failed = 0usize;

    while let Some(joined) = set.join_next().await {
        let outcome = match joined {
            Ok(Ok(value)) => {
                succeeded.push(value);
                continue;
            }
            Ok(Err(e)) => ApplicationError::write(e),
            Err(e) => ApplicationError::internal(format!("write task panicked: {e}")),
        };
        failed += 1;
        first_error.get_or_insert(outcome);
    }

    match first_error {
        Some(err) => {
            tracing::warn!(
                succeeded = succeeded.len(),
                failed = failed,
                "Batch finished with failures, successful operations are kept"
            );
            Err(err)
        }
        None => Ok(succeeded),
    }
}

/// 并发新增文档，返回分配的 ID（顺序不保证）
pub async fn add_all(
    store: &Arc<dyn DocumentStorePort>,
    collection: &str,
    documents: Vec<Value>,
) -> Result<Vec<String>, ApplicationError> {
    let mut set = JoinSet::new();
    for data in documents {
        let store = store.clone();
        let collection = collection.to_string();
        set.spawn(async move { store.add(&collection, data).await });
    }
    join_all(set).await
}

/// 并发删除文档，返回删除数
pub async fn delete_all(
    store: &Arc<dyn DocumentStorePort>,
    collection: &str,
    ids: Vec<String>,
) -> Result<usize, ApplicationError> {
    let mut set = JoinSet::new();
    for id in ids {
        let store = store.clone();
        let collection = collection.to_string();
        set.spawn(async move { store.delete(&collection, &id).await });
    }
    Ok(join_all(set).await?.len())
}
