//! SQLite Document Store

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{Document, DocumentStorePort, StoreError};

/// SQLite Document Store
///
/// 文档以 JSON 文本存放在 documents 表，按 collection 区分
pub struct SqliteDocumentStore {
    pool: DbPool,
}

impl SqliteDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// 关闭连接池（刷写 WAL）
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SQLite document store closed");
    }
}

#[derive(FromRow)]
struct DocumentRow {
    id: String,
    data: String,
}

impl TryFrom<DocumentRow> for Document {
    type Error = StoreError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        Ok(Document {
            id: row.id,
            data: serde_json::from_str(&row.data)
                .map_err(|e| StoreError::SerializationError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl DocumentStorePort for SqliteDocumentStore {
    async fn add(&self, collection: &str, data: Value) -> Result<String, StoreError> {
        let id = Uuid::new_v4().simple().to_string();
        let json = serde_json::to_string(&data)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;

        sqlx::query(
            "INSERT INTO documents (collection, id, data, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(collection)
        .bind(&id)
        .bind(json)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(id)
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows: Vec<DocumentRow> =
            sqlx::query_as("SELECT id, data FROM documents WHERE collection = ? ORDER BY seq")
                .bind(collection)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Document::try_from).collect()
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn count(&self, collection: &str) -> Result<usize, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM documents WHERE collection = ?")
            .bind(collection)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(count as usize)
    }
}
