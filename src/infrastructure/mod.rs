//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现以及触发入口

pub mod adapters;
pub mod http;
pub mod memory;
pub mod persistence;
pub mod scheduler;

pub use adapters::{FakePageFetcher, HttpPageFetcher, HttpPageFetcherConfig};
pub use memory::InMemoryDocumentStore;
pub use persistence::SqliteDocumentStore;
pub use scheduler::{DailyScheduler, DailySchedulerConfig};
