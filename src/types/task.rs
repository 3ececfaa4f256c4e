//! Core task wire types.
//!
//! This module defines [`Task`], [`TaskStatus`], and [`TaskResult`] -- the
//! record shape clients receive when submitting or polling a task.
//!
//! # Serialization
//!
//! Statuses serialize in `snake_case`. The `result` and `updated_at`
//! fields are omitted (not `null`) while the task is pending, so a pending
//! record serializes with exactly `id`, `status`, and `created_at`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task lifecycle status.
///
/// A task starts `Pending` and transitions exactly once, to `Completed`.
/// `Completed` is terminal: the record never changes again.
///
/// # State Machine
///
/// ```text
/// Pending -> Completed
/// Completed -> (terminal, no transitions)
/// ```
///
/// # Examples
///
/// ```
/// use taskd::TaskStatus;
///
/// assert!(!TaskStatus::Pending.is_terminal());
/// assert!(TaskStatus::Completed.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been accepted and is waiting for its simulated work to
    /// finish.
    Pending,
    /// Task finished and carries a result (terminal).
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl TaskStatus {
    /// Returns `true` if this status is terminal (no further transitions).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// The fixed-shape payload attached to a task when it completes.
///
/// The service simulates work, so every task completes with the same
/// payload shape: a human-readable message and a sample data string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    /// Human-readable completion message.
    pub message: String,
    /// Sample result data.
    pub data: String,
}

impl TaskResult {
    /// The payload attached by the simulated completion routine.
    pub fn simulated() -> Self {
        Self {
            message: "task completed successfully".to_string(),
            data: "simulated result payload".to_string(),
        }
    }
}

/// A submitted task.
///
/// Constructed by [`Task::new`] in the `Pending` state and mutated exactly
/// once by the store's completion routine, which sets `status`, `result`,
/// and `updated_at` together. Callers outside the store only ever see
/// snapshots, never the live record.
///
/// # Examples
///
/// ```
/// use taskd::{Task, TaskStatus};
///
/// let task = Task::new();
/// assert_eq!(task.status, TaskStatus::Pending);
/// assert!(task.result.is_none());
/// assert!(task.updated_at.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, generated at creation and used as the lookup key.
    pub id: String,

    /// Current lifecycle status.
    pub status: TaskStatus,

    /// Completion payload. Omitted from serialization while pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TaskResult>,

    /// When the task was created.
    pub created_at: DateTime<Utc>,

    /// When the task transitioned to `Completed`. Omitted while pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new pending task with a generated `UUIDv4` identifier and
    /// `created_at` set to the current UTC time.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            status: TaskStatus::Pending,
            result: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Transitions the task to `Completed`, attaching `result` and setting
    /// `updated_at`.
    ///
    /// The three fields change together so that any snapshot taken of the
    /// record is consistent: a completed task always carries a result and
    /// an update timestamp.
    pub fn complete(&mut self, result: TaskResult) {
        self.status = TaskStatus::Completed;
        self.result = Some(result);
        self.updated_at = Some(Utc::now());
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::new()
    }
}
