//! Task store - the shared pool of pending tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::RwLock;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use taskopt_core::{select_higher_profit_subset, CoreError, Selection, Task};

/// Task store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(CoreError),

    #[error("Optimization of {input_size} tasks exceeded {timeout:?} after exploring {branches} branches")]
    SearchTimedOut {
        timeout: Duration,
        branches: u64,
        input_size: usize,
    },

    #[error("Optimization worker failed: {0}")]
    Worker(#[from] JoinError),
}

/// Result of one extraction, with the samples the metrics layer records.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Tasks removed from the pool.
    pub tasks: Vec<Task>,

    /// Total profit of `tasks`.
    pub profit: f64,

    /// Pool size before the extraction.
    pub input_size: usize,

    /// Pool size after the extraction.
    pub remaining_size: usize,

    /// Time spent in the clique search.
    pub search_duration: Duration,

    /// Time spent in the whole extraction, lock wait included.
    pub total_duration: Duration,
}

/// Pending task pool behind a single reader/writer lock.
///
/// `append` and `extract_higher_profit_subset` take the lock exclusively,
/// `list_all` and `len` share it. Readers never observe a partially updated pool.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl TaskStore {
    /// Create an empty TaskStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tasks` to the pool and return the new pool size.
    ///
    /// The batch is rejected as a whole if any task has a non-finite profit.
    pub async fn append(&self, tasks: Vec<Task>) -> Result<usize, StoreError> {
        for task in &tasks {
            task.validate().map_err(StoreError::Core)?;
        }

        let added = tasks.len();
        let mut pool = self.tasks.write().await;
        pool.extend(tasks);
        debug!(added, pool_size = pool.len(), "Tasks appended");
        Ok(pool.len())
    }

    /// Snapshot of the whole pool.
    pub async fn list_all(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Current pool size.
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    /// Returns true if the pool is empty.
    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }

    /// Remove and return the most profitable set of compatible tasks.
    ///
    /// Graph build, search and pool replacement all happen under one exclusive
    /// lock, so no other store operation interleaves. The search runs on the
    /// blocking pool. If `timeout` elapses first the search is cancelled, the
    /// pool is left as it was and [`StoreError::SearchTimedOut`] is returned.
    pub async fn extract_higher_profit_subset(
        &self,
        timeout: Option<Duration>,
    ) -> Result<Extraction, StoreError> {
        let started = Instant::now();
        let mut pool = self.tasks.clone().write_owned().await;
        let input_size = pool.len();

        let cancel = CancellationToken::new();
        let timer = timeout.map(|limit| {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                tokio::time::sleep(limit).await;
                cancel.cancel();
            })
        });

        let search_cancel = cancel.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            let Selection {
                selected,
                remaining,
                profit,
                search_duration,
            } = select_higher_profit_subset(&pool, Some(&search_cancel))?;
            *pool = remaining;
            Ok::<_, CoreError>((selected, profit, search_duration, pool.len()))
        })
        .await;

        if let Some(timer) = timer {
            timer.abort();
        }

        let (tasks, profit, search_duration, remaining_size) =
            outcome?.map_err(|err| match err {
                CoreError::SearchCancelled { branches } => {
                    let timeout = timeout.unwrap_or_default();
                    warn!(
                        input_size,
                        branches,
                        timeout_secs = timeout.as_secs_f64(),
                        "Optimization timed out, pool left unchanged"
                    );
                    StoreError::SearchTimedOut {
                        timeout,
                        branches,
                        input_size,
                    }
                }
                other => StoreError::Core(other),
            })?;

        let total_duration = started.elapsed();
        info!(
            input_size,
            selected = tasks.len(),
            remaining_size,
            profit,
            search_ms = search_duration.as_millis() as u64,
            total_ms = total_duration.as_millis() as u64,
            "Extracted higher-profit subset"
        );

        Ok(Extraction {
            tasks,
            profit,
            input_size,
            remaining_size,
            search_duration,
            total_duration,
        })
    }
}
