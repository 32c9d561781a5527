//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{FetchError, StoreError};
use crate::domain::dictionary::ExtractError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 源页面抓取失败
    #[error("Fetch error: {0}")]
    FetchError(String),

    /// HTML 解析失败
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 单个文档写入/删除失败
    #[error("Write error: {0}")]
    WriteError(String),

    /// 读取集合失败
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建写入错误
    pub fn write(err: StoreError) -> Self {
        Self::WriteError(err.to_string())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<FetchError> for ApplicationError {
    fn from(err: FetchError) -> Self {
        Self::FetchError(err.to_string())
    }
}

impl From<ExtractError> for ApplicationError {
    fn from(err: ExtractError) -> Self {
        Self::ParseError(err.to_string())
    }
}

/// 读操作的存储错误
impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}
