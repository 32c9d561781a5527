//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod document_store;
mod page_fetcher;

pub use document_store::{encode, Document, DocumentStorePort, StoreError};
pub use page_fetcher::{FetchError, PageFetcherPort};
