//! daily_words - 每日单词抓取服务
//!
//! 启动顺序：配置 → 日志 → 存储 → 抓取器 → 定时任务 → HTTP 服务

use std::sync::Arc;

use daily_words::application::{DocumentStorePort, PageFetcherPort};
use daily_words::config::{load_config, print_config, AppConfig};
use daily_words::infrastructure::adapters::{HttpPageFetcher, HttpPageFetcherConfig};
use daily_words::infrastructure::http::{AppState, HttpServer, ServerConfig};
use daily_words::infrastructure::memory::InMemoryDocumentStore;
use daily_words::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteDocumentStore,
};
use daily_words::infrastructure::scheduler::{DailyScheduler, DailySchedulerConfig};
use tokio_util::sync::CancellationToken;

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},daily_words={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("daily_words - scheduled dictionary scraper");
    print_config(&config);

    // 初始化文档存储（进程内只初始化一次）
    let mut sqlite_store: Option<Arc<SqliteDocumentStore>> = None;
    let store: Arc<dyn DocumentStorePort> = if config.database.in_memory {
        Arc::new(InMemoryDocumentStore::new())
    } else {
        if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let db_config = DatabaseConfig {
            database_url: config.database.database_url(),
            max_connections: config.database.max_connections,
        };
        let pool = create_pool(&db_config).await?;
        run_migrations(&pool).await?;

        let sqlite = Arc::new(SqliteDocumentStore::new(pool));
        sqlite_store = Some(sqlite.clone());
        sqlite
    };

    // 创建源页面抓取器
    let fetcher_config = HttpPageFetcherConfig::new(config.source.url.clone())
        .with_timeout(config.source.timeout_secs);
    let fetcher: Arc<dyn PageFetcherPort> = Arc::new(HttpPageFetcher::new(fetcher_config)?);

    let state = Arc::new(AppState::new(fetcher, store));
    let shutdown = CancellationToken::new();

    // 启动定时任务
    let scheduler = if config.scheduler.enabled {
        let scheduler_config = DailySchedulerConfig {
            run_at: config.scheduler.run_at_time()?,
            update_dictionary_enabled: config.scheduler.update_dictionary_enabled,
            daily_selection_enabled: config.scheduler.daily_selection_enabled,
            daily_count: config.sampler.daily_count,
        };
        let running = DailyScheduler::new(
            scheduler_config,
            state.update_dictionary_handler.clone(),
            state.select_daily_words_handler.clone(),
            shutdown.clone(),
        )
        .start()
        .await?;
        Some(running)
    } else {
        None
    };

    // Ctrl-C 触发关闭
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            return;
        }
        tracing::info!("Received shutdown signal");
        signal_token.cancel();
    });

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    let server_token = shutdown.clone();
    let result = server
        .run_with_shutdown(async move { server_token.cancelled().await })
        .await;

    // 服务器异常退出时同样停止定时任务
    shutdown.cancel();
    if let Some(running) = scheduler {
        running.stopped().await;
    }

    if let Some(sqlite) = sqlite_store {
        sqlite.close().await;
    }

    result?;
    tracing::info!("Shutdown complete");

    Ok(())
}
