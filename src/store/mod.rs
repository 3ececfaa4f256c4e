//! The task store: creation, background completion, and lookups.
//!
//! [`TaskStore`] owns the identifier -> record mapping behind a
//! reader-writer lock. Any number of lookups proceed concurrently; an
//! insert or a completion update takes the write lock only for the
//! duration of the map mutation. The simulated-work delay elapses *before*
//! the completion future touches the lock, so a sleeping task never blocks
//! readers or other writers.
//!
//! # Concurrency
//!
//! The store is cheaply cloneable (the map lives behind an `Arc`), so the
//! HTTP layer and every spawned completion future share one map. Snapshots
//! returned by [`TaskStore::create`] and [`TaskStore::get`] are clones --
//! safe to read without further synchronization, and consistent because
//! the completion routine mutates `status`, `result`, and `updated_at`
//! under a single write-lock acquisition.
//!
//! # Lifetime
//!
//! Records are never deleted; the map grows for the lifetime of the
//! process. Completion futures are fire-and-forget: there is no pool, no
//! queue, and no drain on shutdown.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::debug;

use crate::constants::DEFAULT_PROCESSING_DELAY_MS;
use crate::types::{Task, TaskResult};

/// Configuration for the task store.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use taskd::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.processing_delay, Duration::from_millis(60_000));
///
/// let fast = StoreConfig {
///     processing_delay: Duration::from_millis(50),
/// };
/// assert_eq!(fast.processing_delay.as_millis(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// How long a task's simulated work takes. Each completion future
    /// sleeps for this duration before marking its task completed.
    pub processing_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
        }
    }
}

/// Thread-safe in-memory task store.
///
/// Construct one store per process (or per test -- independent instances
/// share nothing) and clone it wherever shared access is needed.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use taskd::{StoreConfig, TaskStore};
///
/// let store = TaskStore::new().with_config(StoreConfig {
///     processing_delay: Duration::from_millis(100),
/// });
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Arc<RwLock<HashMap<String, Task>>>,
    config: StoreConfig,
}

impl TaskStore {
    /// Creates an empty store with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store configuration.
    ///
    /// Call before sharing the store; the configuration is read by every
    /// completion future spawned afterwards.
    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns a reference to the store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Creates a new pending task and schedules its background completion.
    ///
    /// The returned snapshot is immediately resolvable via
    /// [`get`](TaskStore::get). One completion future is spawned per call;
    /// creations are independent of each other and of any in-flight
    /// completions.
    ///
    /// Must be called from within a tokio runtime (the HTTP handlers and
    /// `#[tokio::test]` bodies both qualify).
    pub fn create(&self) -> Task {
        let task = Task::new();
        let task_id = task.id.clone();

        self.tasks.write().insert(task_id.clone(), task.clone());
        debug!(%task_id, "task created");

        let store = self.clone();
        tokio::spawn(async move {
            store.complete_after_delay(task_id).await;
        });

        task
    }

    /// Returns a snapshot of the task with the given ID, or `None`.
    ///
    /// Not-found is a normal outcome, not an error: identifiers the store
    /// never issued simply miss.
    pub fn get(&self, task_id: &str) -> Option<Task> {
        self.tasks.read().get(task_id).cloned()
    }

    /// Returns the number of tasks the store has recorded.
    pub fn len(&self) -> usize {
        self.tasks.read().len()
    }

    /// Returns `true` if the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.read().is_empty()
    }

    /// Sleeps the configured processing delay, then completes the task.
    ///
    /// The sleep happens with no lock held.
    async fn complete_after_delay(&self, task_id: String) {
        tokio::time::sleep(self.config.processing_delay).await;
        self.complete(&task_id);
    }

    /// Marks the task completed, attaching the simulated result and update
    /// timestamp in one write-lock acquisition.
    ///
    /// A record that has vanished (records are never deleted today, so
    /// this cannot occur) or already reached a terminal state is skipped
    /// silently.
    fn complete(&self, task_id: &str) {
        let mut tasks = self.tasks.write();
        match tasks.get_mut(task_id) {
            Some(task) if !task.status.is_terminal() => {
                task.complete(TaskResult::simulated());
                debug!(%task_id, "task completed");
            }
            Some(_) => {}
            None => {
                debug!(%task_id, "completion fired for unknown task, skipping");
            }
        }
    }
}
