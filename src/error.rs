//! Error types for the service boundary.
//!
//! The error taxonomy is deliberately small: task creation cannot fail,
//! and a lookup miss is the only negative outcome the core can produce.
//! [`TaskStore::get`](crate::store::TaskStore::get) itself returns
//! `Option<Task>` -- not-found is a normal result at the store boundary --
//! and the HTTP layer converts the miss into [`TaskError::NotFound`] for
//! the wire response.

use thiserror::Error;

/// Errors surfaced by the task-submission API.
///
/// # Examples
///
/// ```
/// use taskd::TaskError;
///
/// let err = TaskError::NotFound {
///     task_id: "missing-task".to_string(),
/// };
/// assert_eq!(err.to_string(), "task not found: missing-task");
/// ```
#[derive(Debug, Error)]
pub enum TaskError {
    /// Task with the given ID was not found.
    #[error("task not found: {task_id}")]
    NotFound {
        /// The task ID that was not found.
        task_id: String,
    },
}
