//! Integration tests for the payment-api fixture.
//!
//! The injection test drives the real endpoint with the classic
//! `1 OR 1=1` payload and expects every seeded row back, proving the
//! defect the fixture exists to carry is actually present.

use axum::http::StatusCode;

mod common;

#[tokio::test]
async fn test_users_lookup_by_id() {
    let (addr, _task_rx) = common::spawn_payments().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/users", addr))
        .query(&[("id", "2")])
        .send()
        .await
        .expect("payment-api unreachable");

    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!([
            { "id": 2, "name": "bob", "email": "bob@example.com" }
        ])
    );
}

#[tokio::test]
async fn test_users_injection_returns_every_row() {
    let (addr, _task_rx) = common::spawn_payments().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/users", addr))
        .query(&[("id", "0 OR 1=1")])
        .send()
        .await
        .expect("payment-api unreachable");

    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3, "injection should bypass the id filter");
}

#[tokio::test]
async fn test_users_unknown_id_returns_empty_set() {
    let (addr, _task_rx) = common::spawn_payments().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/users", addr))
        .query(&[("id", "999")])
        .send()
        .await
        .expect("payment-api unreachable");

    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_tasks_forward_to_worker_channel() {
    let (addr, mut task_rx) = common::spawn_payments().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/tasks", addr))
        .json(&serde_json::json!({ "command": "echo hello" }))
        .send()
        .await
        .expect("payment-api unreachable");

    assert_eq!(res.status(), StatusCode::ACCEPTED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "queued" }));

    let forwarded = task_rx.recv().await.unwrap();
    assert_eq!(forwarded, "echo hello");
}

#[tokio::test]
async fn test_tasks_rejected_when_worker_gone() {
    let (addr, task_rx) = common::spawn_payments().await;
    drop(task_rx);
    let client = common::client();

    let res = client
        .post(format!("http://{}/tasks", addr))
        .json(&serde_json::json!({ "command": "echo hello" }))
        .send()
        .await
        .expect("payment-api unreachable");

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "worker unavailable" }));
}
