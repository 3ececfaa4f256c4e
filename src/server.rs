//! HTTP surface for the task store.
//!
//! Two routes bridge REST calls to the store:
//!
//! ```text
//! POST /tasks        -> create, 201 with the new record
//! GET  /tasks/{id}   -> lookup, 200 with the record or 404
//! ```
//!
//! A method mismatch on either path yields 405. The router is built
//! separately from the serve loop so tests can drive it in-process.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use crate::error::TaskError;
use crate::store::TaskStore;
use crate::types::Task;

/// Builds the service router over the given store.
pub fn build_router(store: TaskStore) -> Router {
    Router::new()
        .route("/tasks", post(create_task))
        .route("/tasks/{id}", get(get_task))
        .with_state(store)
}

/// Binds `addr` and serves the router until the process exits.
pub async fn serve(addr: SocketAddr, store: TaskStore) -> Result<()> {
    let router = build_router(store);

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

async fn create_task(State(store): State<TaskStore>) -> (StatusCode, Json<Task>) {
    let task = store.create();
    (StatusCode::CREATED, Json(task))
}

async fn get_task(
    State(store): State<TaskStore>,
    Path(id): Path<String>,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    match store.get(&id) {
        Some(task) => Ok(Json(task)),
        None => {
            let err = TaskError::NotFound { task_id: id };
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({ "error": err.to_string() })),
            ))
        }
    }
}
