//! Memory Layer - In-Memory Document Store
//!
//! 用于测试和临时运行的内存文档存储

mod document_store;

pub use document_store::InMemoryDocumentStore;
