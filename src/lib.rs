//! daily_words - 每日单词抓取服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Dictionary Context: 单词表提取、每日抽样
//!
//! 应用层 (application/):
//! - Ports: PageFetcher, DocumentStore
//! - Commands: UpdateDictionary, SelectDailyWords
//! - Queries: GetDailyWords
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP 页面抓取
//! - Persistence: SQLite 文档存储
//! - Memory: 内存文档存储
//! - Scheduler: 每日定时触发
//! - HTTP: 请求触发 + 只读 API

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
