//! HTTP surface tests, driven in-process through tower's `oneshot`.
//!
//! The router is exercised without a socket: each test builds a store,
//! wraps it in the service router, and fires requests at it directly.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use taskd::server::build_router;
use taskd::{StoreConfig, TaskStatus, TaskStore};

fn fast_store() -> TaskStore {
    TaskStore::new().with_config(StoreConfig {
        processing_delay: Duration::from_millis(50),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn post_tasks_returns_201_with_pending_record() {
    let router = build_router(TaskStore::new());

    let response = router
        .oneshot(
            Request::post("/tasks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert!(json["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(json.get("created_at").is_some());
    assert!(json.get("result").is_none(), "result omitted while pending");
    assert!(
        json.get("updated_at").is_none(),
        "updated_at omitted while pending"
    );
}

#[tokio::test]
async fn get_tasks_returns_the_created_record() {
    let store = TaskStore::new();
    let router = build_router(store.clone());
    let task = store.create();

    let response = router
        .oneshot(
            Request::get(format!("/tasks/{}", task.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], task.id.as_str());
    assert_eq!(json["status"], "pending");
}

#[tokio::test]
async fn get_unknown_task_returns_404() {
    let router = build_router(TaskStore::new());

    let response = router
        .oneshot(
            Request::get("/tasks/no-such-task")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "task not found: no-such-task");
}

#[tokio::test]
async fn method_mismatch_returns_405() {
    let router = build_router(TaskStore::new());

    let response = router
        .clone()
        .oneshot(Request::get("/tasks").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = router
        .oneshot(
            Request::post("/tasks/some-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn completed_task_serializes_result_and_update_timestamp() {
    let store = fast_store();
    let router = build_router(store.clone());
    let task = store.create();

    // Wait for the background completion before fetching.
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if let Some(t) = store.get(&task.id) {
                if t.status == TaskStatus::Completed {
                    break;
                }
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("task should complete");

    let response = router
        .oneshot(
            Request::get(format!("/tasks/{}", task.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "completed");
    assert_eq!(json["result"]["message"], "task completed successfully");
    assert_eq!(json["result"]["data"], "simulated result payload");
    assert!(json.get("updated_at").is_some());
    assert!(json.get("created_at").is_some());
}
