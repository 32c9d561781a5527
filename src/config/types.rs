//! Configuration Types
//!
//! 定义所有配置结构体

use chrono::NaiveTime;
use serde::Deserialize;

use crate::domain::dictionary::DEFAULT_DAILY_COUNT;
use crate::infrastructure::adapters::DEFAULT_SOURCE_URL;

/// `scheduler.run_at` 的格式
pub const RUN_AT_FORMAT: &str = "%H:%M";

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 源页面配置
    #[serde(default)]
    pub source: SourceConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 定时任务配置
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// 抽样配置
    #[serde(default)]
    pub sampler: SamplerConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 源页面配置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// 源页面 URL
    #[serde(default = "default_source_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_source_timeout")]
    pub timeout_secs: u64,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_source_timeout() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_secs: default_source_timeout(),
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库文件路径
    #[serde(default = "default_db_path")]
    pub path: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// 使用内存存储（进程退出即丢失）
    #[serde(default)]
    pub in_memory: bool,
}

fn default_db_path() -> String {
    "data/daily_words.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            in_memory: false,
        }
    }
}

impl DatabaseConfig {
    /// 获取数据库 URL
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path)
    }
}

/// 定时任务配置
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// 是否启用定时任务
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// 每日触发时刻（UTC，HH:MM）
    #[serde(default = "default_run_at")]
    pub run_at: String,

    /// 是否启用词典更新任务
    #[serde(default = "default_true")]
    pub update_dictionary_enabled: bool,

    /// 是否启用每日选词任务
    #[serde(default = "default_true")]
    pub daily_selection_enabled: bool,
}

fn default_true() -> bool {
    true
}

fn default_run_at() -> String {
    "00:00".to_string()
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            run_at: default_run_at(),
            update_dictionary_enabled: true,
            daily_selection_enabled: true,
        }
    }
}

impl SchedulerConfig {
    /// 解析触发时刻
    pub fn run_at_time(&self) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(&self.run_at, RUN_AT_FORMAT)
    }
}

/// 抽样配置
#[derive(Debug, Clone, Deserialize)]
pub struct SamplerConfig {
    /// 每日选取的单词数
    #[serde(default = "default_daily_count")]
    pub daily_count: usize,
}

fn default_daily_count() -> usize {
    DEFAULT_DAILY_COUNT
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            daily_count: default_daily_count(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
