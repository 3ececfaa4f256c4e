//! Minimal asynchronous task-submission service.
//!
//! A client submits a task over HTTP, receives an identifier immediately,
//! and polls for completion status and result. The heart of the crate is
//! the [`TaskStore`]: an in-memory lifecycle manager that creates tasks,
//! schedules a one-shot background completion per task, and serves point
//! lookups safely under concurrent access.
//!
//! # Overview
//!
//! A task progresses through a two-state machine (`pending` ->
//! `completed`). Completion is simulated: each created task is finished by
//! a spawned future after a fixed, configurable delay. The store never
//! deletes records, so every identifier it has issued stays resolvable for
//! the lifetime of the process.
//!
//! # Module Organization
//!
//! - [`types`] - Wire types (`Task`, `TaskStatus`, `TaskResult`)
//! - [`store`] - The task store and its configuration
//! - [`error`] - Error types for the service boundary
//! - [`server`] - Axum router and serve loop
//! - [`config`] - CLI/environment configuration
//! - [`constants`] - Default delay and bind address

pub mod config;
pub mod constants;
pub mod error;
pub mod server;
pub mod store;
pub mod types;

// Re-exports for ergonomic access
pub use error::TaskError;
pub use store::{StoreConfig, TaskStore};
pub use types::{Task, TaskResult, TaskStatus};
