//! Daily Scheduler - 每日定时任务
//!
//! 进程内替代托管平台的定时触发器：两个 cron 任务，
//! 每天在配置的 UTC 时刻各触发一次。错误只记录日志，不重试

use chrono::{NaiveTime, Timelike};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use tokio_util::sync::CancellationToken;

use crate::application::{
    SelectDailyWords, SelectDailyWordsHandler, UpdateDictionary, UpdateDictionaryHandler,
};

/// 词典更新任务名
pub const UPDATE_DICTIONARY_JOB: &str = "updateDictionary";
/// 每日选词任务名
pub const DAILY_SELECTION_JOB: &str = "dailyWordSelection";

/// 调度器错误
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("Failed to create scheduler: {0}")]
    Create(String),

    #[error("Failed to register job {job}: {reason}")]
    Register { job: &'static str, reason: String },

    #[error("Failed to start scheduler: {0}")]
    Start(String),
}

/// 调度器配置
#[derive(Debug, Clone)]
pub struct DailySchedulerConfig {
    /// 每日触发时刻（UTC）
    pub run_at: NaiveTime,
    /// 是否启用词典更新任务
    pub update_dictionary_enabled: bool,
    /// 是否启用每日选词任务
    pub daily_selection_enabled: bool,
    /// 每日选词数量
    pub daily_count: usize,
}

impl Default for DailySchedulerConfig {
    fn default() -> Self {
        Self {
            run_at: NaiveTime::MIN,
            update_dictionary_enabled: true,
            daily_selection_enabled: true,
            daily_count: crate::domain::dictionary::DEFAULT_DAILY_COUNT,
        }
    }
}

/// 每天 `run_at` 触发一次的 cron 表达式（秒 分 时 日 月 周）
pub fn cron_expression(run_at: NaiveTime) -> String {
    format!(
        "{} {} {} * * *",
        run_at.second(),
        run_at.minute(),
        run_at.hour()
    )
}

/// 定时触发：抓取并写入词典
pub async fn update_dictionary_job(handler: Arc<UpdateDictionaryHandler>) {
    match handler.handle(UpdateDictionary).await {
        Ok(response) => {
            tracing::info!(written = response.written, "Dictionary updated successfully")
        }
        Err(e) => tracing::error!(error = %e, "Error updating dictionary"),
    }
}

/// 定时触发：重新生成每日选集
pub async fn daily_selection_job(handler: Arc<SelectDailyWordsHandler>, count: usize) {
    match handler.handle(SelectDailyWords { count }).await {
        Ok(response) => tracing::info!(
            id = %response.id,
            selected = response.selection.words.len(),
            "Daily words selected and saved"
        ),
        Err(e) => tracing::error!(error = %e, "Error selecting daily words"),
    }
}

/// 已启动的调度器
pub struct RunningScheduler {
    jobs: Vec<&'static str>,
    task: JoinHandle<()>,
}

impl RunningScheduler {
    /// 已注册的任务名
    pub fn jobs(&self) -> &[&'static str] {
        &self.jobs
    }

    /// 等待取消令牌触发后调度器关闭完成
    pub async fn stopped(self) {
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "Scheduler shutdown task panicked");
        }
    }
}

/// 每日定时调度器
pub struct DailyScheduler {
    config: DailySchedulerConfig,
    update_dictionary: Arc<UpdateDictionaryHandler>,
    select_daily_words: Arc<SelectDailyWordsHandler>,
    shutdown: CancellationToken,
}

impl DailyScheduler {
    pub fn new(
        config: DailySchedulerConfig,
        update_dictionary: Arc<UpdateDictionaryHandler>,
        select_daily_words: Arc<SelectDailyWordsHandler>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            config,
            update_dictionary,
            select_daily_words,
            shutdown,
        }
    }

    /// 注册所有启用的任务并启动；取消令牌触发后停止触发新的运行
    pub async fn start(self) -> Result<RunningScheduler, SchedulerError> {
        let cron = cron_expression(self.config.run_at);
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| SchedulerError::Create(e.to_string()))?;
        let mut jobs = Vec::new();

        if self.config.update_dictionary_enabled {
            let handler = self.update_dictionary.clone();
            let job = Job::new_async(cron.as_str(), move |_id, _scheduler| {
                let handler = handler.clone();
                Box::pin(async move {
                    tracing::info!(job = UPDATE_DICTIONARY_JOB, "Scheduled job triggered");
                    update_dictionary_job(handler).await;
                })
            });
            register(&scheduler, UPDATE_DICTIONARY_JOB, job).await?;
            jobs.push(UPDATE_DICTIONARY_JOB);
        }

        if self.config.daily_selection_enabled {
            let handler = self.select_daily_words.clone();
            let count = self.config.daily_count;
            let job = Job::new_async(cron.as_str(), move |_id, _scheduler| {
                let handler = handler.clone();
                Box::pin(async move {
                    tracing::info!(job = DAILY_SELECTION_JOB, "Scheduled job triggered");
                    daily_selection_job(handler, count).await;
                })
            });
            register(&scheduler, DAILY_SELECTION_JOB, job).await?;
            jobs.push(DAILY_SELECTION_JOB);
        }

        scheduler
            .start()
            .await
            .map_err(|e| SchedulerError::Start(e.to_string()))?;

        tracing::info!(jobs = ?jobs, cron = %cron, "DailyScheduler started");

        let shutdown = self.shutdown;
        let mut scheduler = scheduler;
        let task = tokio::spawn(async move {
            shutdown.cancelled().await;
            if let Err(e) = scheduler.shutdown().await {
                tracing::error!(error = %e, "Failed to shut down scheduler");
            }
            tracing::info!("DailyScheduler stopped");
        });

        Ok(RunningScheduler { jobs, task })
    }
}

async fn register(
    scheduler: &JobScheduler,
    name: &'static str,
    job: Result<Job, JobSchedulerError>,
) -> Result<(), SchedulerError> {
    let job = job.map_err(|e| SchedulerError::Register {
        job: name,
        reason: e.to_string(),
    })?;
    scheduler
        .add(job)
        .await
        .map_err(|e| SchedulerError::Register {
            job: name,
            reason: e.to_string(),
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::application::ports::{DocumentStorePort, FetchError};
    use crate::domain::dictionary::{DAILY_WORDS_COLLECTION, DICTIONARY_COLLECTION};
    use crate::infrastructure::adapters::FakePageFetcher;
    use crate::infrastructure::memory::InMemoryDocumentStore;

    fn scheduler(config: DailySchedulerConfig, shutdown: CancellationToken) -> DailyScheduler {
        let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new());
        DailyScheduler::new(
            config,
            Arc::new(UpdateDictionaryHandler::new(
                Arc::new(FakePageFetcher::with_body("")),
                store.clone(),
            )),
            Arc::new(SelectDailyWordsHandler::new(store)),
            shutdown,
        )
    }

    #[test]
    fn test_cron_expression_for_midnight() {
        assert_eq!(cron_expression(NaiveTime::MIN), "0 0 0 * * *");
    }

    #[test]
    fn test_cron_expression_for_configured_time() {
        let run_at = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        assert_eq!(cron_expression(run_at), "0 30 6 * * *");
    }

    #[test]
    fn test_cron_expression_is_accepted_by_job() {
        let run_at = NaiveTime::from_hms_opt(23, 5, 0).unwrap();
        let job = Job::new_async(cron_expression(run_at).as_str(), |_id, _scheduler| {
            Box::pin(async {})
        });
        assert!(job.is_ok());
    }

    #[tokio::test]
    async fn test_failing_job_is_swallowed() {
        let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new());
        let handler = Arc::new(UpdateDictionaryHandler::new(
            Arc::new(FakePageFetcher::failing(FetchError::Timeout)),
            store.clone(),
        ));

        update_dictionary_job(handler).await;
        assert_eq!(store.count(DICTIONARY_COLLECTION).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_daily_selection_job_writes_selection() {
        let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new());
        let handler = Arc::new(SelectDailyWordsHandler::new(store.clone()));

        daily_selection_job(handler, 10).await;
        assert_eq!(store.count(DAILY_WORDS_COLLECTION).await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_start_registers_only_enabled_jobs() {
        let shutdown = CancellationToken::new();
        let config = DailySchedulerConfig {
            daily_selection_enabled: false,
            ..Default::default()
        };

        let running = scheduler(config, shutdown.clone()).start().await.unwrap();
        assert_eq!(running.jobs(), [UPDATE_DICTIONARY_JOB]);

        shutdown.cancel();
        running.stopped().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_stops_when_cancelled() {
        let shutdown = CancellationToken::new();
        let running = scheduler(DailySchedulerConfig::default(), shutdown.clone())
            .start()
            .await
            .unwrap();
        assert_eq!(running.jobs(), [UPDATE_DICTIONARY_JOB, DAILY_SELECTION_JOB]);

        shutdown.cancel();
        tokio::time::timeout(std::time::Duration::from_secs(5), running.stopped())
            .await
            .unwrap();
    }
}
