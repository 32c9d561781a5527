//! Configuration Loader
//!
//! 多源配置加载与合并
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "DAILY_WORDS";

/// 加载应用配置
///
/// # 环境变量示例
/// - `DAILY_WORDS_SERVER__PORT=8080`
/// - `DAILY_WORDS_SOURCE__URL=https://example.com/words/`
/// - `DAILY_WORDS_SCHEDULER__RUN_AT=03:30`
/// - `DAILY_WORDS_SAMPLER__DAILY_COUNT=5`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时搜索默认文件名
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5060)?
        .set_default("source.timeout_secs", 30)?
        .set_default("database.path", "data/daily_words.db")?
        .set_default("database.max_connections", 5)?
        .set_default("database.in_memory", false)?
        .set_default("scheduler.enabled", true)?
        .set_default("scheduler.run_at", "00:00")?
        .set_default("scheduler.update_dictionary_enabled", true)?
        .set_default("scheduler.daily_selection_enabled", true)?
        .set_default("sampler.daily_count", 10)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 层级分隔符为双下划线，例如 DAILY_WORDS_SOURCE__URL
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.source.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Source URL cannot be empty".to_string(),
        ));
    }

    if config.source.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Source timeout cannot be 0".to_string(),
        ));
    }

    if !config.database.in_memory && config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if config.sampler.daily_count == 0 {
        return Err(ConfigError::ValidationError(
            "Daily word count cannot be 0".to_string(),
        ));
    }

    config.scheduler.run_at_time().map_err(|e| {
        ConfigError::ValidationError(format!(
            "Invalid scheduler.run_at {:?} (expected HH:MM): {}",
            config.scheduler.run_at, e
        ))
    })?;

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Source URL: {}", config.source.url);
    tracing::info!("Source Timeout: {}s", config.source.timeout_secs);
    if config.database.in_memory {
        tracing::info!("Database: in-memory");
    } else {
        tracing::info!("Database: {}", config.database.path);
        tracing::info!("Database Max Connections: {}", config.database.max_connections);
    }
    tracing::info!("Scheduler Enabled: {}", config.scheduler.enabled);
    if config.scheduler.enabled {
        tracing::info!("Scheduler Run At: {} UTC", config.scheduler.run_at);
        tracing::info!(
            "Jobs: updateDictionary={}, dailyWordSelection={}",
            config.scheduler.update_dictionary_enabled,
            config.scheduler.daily_selection_enabled
        );
    }
    tracing::info!("Daily Word Count: {}", config.sampler.daily_count);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
