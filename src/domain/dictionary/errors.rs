//! Dictionary Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTML 解析失败: {0}")]
    Parse(String),
}
