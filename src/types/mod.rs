//! Wire types for the task-submission API.
//!
//! These types serialize directly to the JSON shapes served over HTTP.
//! `result` and `updated_at` are omitted from the output while a task is
//! pending.

pub mod task;

pub use task::{Task, TaskResult, TaskStatus};
