//! Document Store Port - 文档存储抽象
//!
//! 模拟托管文档数据库：命名集合 + 无模式文档 + 存储端分配的 ID
//! 具体实现在 infrastructure 层（SQLite、内存）

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Document Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 存储中的一条文档
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// 存储端分配的 ID
    pub id: String,
    pub data: Value,
}

impl Document {
    /// 反序列化为具体类型
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        serde_json::from_value(self.data.clone())
            .map_err(|e| StoreError::SerializationError(e.to_string()))
    }
}

/// 将实体编码为文档数据
pub fn encode<T: Serialize>(value: &T) -> Result<Value, StoreError> {
    serde_json::to_value(value).map_err(|e| StoreError::SerializationError(e.to_string()))
}

/// Document Store Port
///
/// 每个操作只涉及单个文档，不存在跨文档事务
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// 新增文档，返回分配的 ID
    async fn add(&self, collection: &str, data: Value) -> Result<String, StoreError>;

    /// 列出集合中的全部文档（无顺序保证）
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// 删除文档；文档不存在时视为成功
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// 集合文档数
    async fn count(&self, collection: &str) -> Result<usize, StoreError> {
        Ok(self.list(collection).await?.len())
    }
}
