//! Program catalog and seat-limited enrollment over HTTP

use axum::http::{Method, StatusCode};
use futures_util::future::join_all;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;

async fn create_program(app: &TestApp, body: Value) -> String {
    let response = app.post("/programs", body).await;
    assert_ok(&response);
    response.body["id"].as_str().unwrap().to_string()
}

async fn join(app: &TestApp, id: &str) -> TestResponse {
    app.request(Method::POST, &format!("/programs/{}/join", id), None, None)
        .await
}

#[tokio::test]
async fn test_join_until_full() {
    let app = TestApp::new();
    let id = create_program(&app, json!({ "name": "Yoga", "capacity": 1 })).await;

    let first = join(&app, &id).await;
    assert_ok(&first);
    assert_eq!(first.body["ok"], true);
    assert_eq!(first.body["program"]["enrolled"], 1);

    let second = join(&app, &id).await;
    assert_error(&second, StatusCode::BAD_REQUEST, "ProgramFull", "Program full");

    let listed = app.get("/programs").await;
    assert_eq!(listed.body[0]["enrolled"], 1);
}

#[tokio::test]
async fn test_create_program_defaults() {
    let app = TestApp::new();

    let response = app
        .post(
            "/programs",
            json!({ "name": "Run club", "mode": "in-person", "status": "open", "enrolled": 9 }),
        )
        .await;
    assert_ok(&response);
    assert_eq!(response.body["enrolled"], 0);
    assert_eq!(response.body["capacity"], 30);
    assert_eq!(response.body["mode"], "in-person");
}

#[tokio::test]
async fn test_create_program_rejects_non_positive_capacity() {
    let app = TestApp::new();

    let response = app.post("/programs", json!({ "name": "Nap", "capacity": 0 })).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Validation");
}

#[tokio::test]
async fn test_concurrent_joins_never_overfill() {
    let app = TestApp::new();
    let id = create_program(&app, json!({ "name": "Spin", "capacity": 3 })).await;

    let responses = join_all((0..12).map(|_| join(&app, &id))).await;

    let accepted = responses.iter().filter(|r| r.status == StatusCode::OK).count();
    let full = responses
        .iter()
        .filter(|r| r.body["error"] == "ProgramFull")
        .count();
    assert_eq!(accepted, 3);
    assert_eq!(full, 9);

    let listed = app.get("/programs").await;
    assert_eq!(listed.body[0]["enrolled"], 3);
}

#[tokio::test]
async fn test_update_program_fields_and_capacity() {
    let app = TestApp::new();
    let id = create_program(&app, json!({ "name": "Yoga", "capacity": 2 })).await;
    assert_ok(&join(&app, &id).await);
    assert_ok(&join(&app, &id).await);

    let renamed = app
        .request(
            Method::PUT,
            &format!("/programs/{}", id),
            Some(json!({ "schedule": "Mon 7pm", "status": "closed" })),
            None,
        )
        .await;
    assert_ok(&renamed);
    assert_eq!(renamed.body["name"], "Yoga");
    assert_eq!(renamed.body["schedule"], "Mon 7pm");
    assert_eq!(renamed.body["enrolled"], 2);

    let shrink = app
        .request(
            Method::PUT,
            &format!("/programs/{}", id),
            Some(json!({ "capacity": 1 })),
            None,
        )
        .await;
    assert_error(
        &shrink,
        StatusCode::BAD_REQUEST,
        "Validation",
        "Capacity cannot be lower than the 2 already enrolled",
    );

    let grow = app
        .request(
            Method::PUT,
            &format!("/programs/{}", id),
            Some(json!({ "capacity": 4 })),
            None,
        )
        .await;
    assert_ok(&grow);
    assert_eq!(grow.body["capacity"], 4);

    assert_ok(&join(&app, &id).await);
}

#[tokio::test]
async fn test_join_ignores_advertised_status() {
    let app = TestApp::new();
    let id = create_program(&app, json!({ "name": "Closed", "status": "closed", "capacity": 2 })).await;

    assert_ok(&join(&app, &id).await);
}

#[tokio::test]
async fn test_unknown_program_is_not_found() {
    let app = TestApp::new();

    let join_missing = join(&app, &uuid::Uuid::new_v4().to_string()).await;
    assert_error(&join_missing, StatusCode::NOT_FOUND, "NotFound", "Program not found");

    let join_garbage = join(&app, "garbage").await;
    assert_error(&join_garbage, StatusCode::NOT_FOUND, "NotFound", "Program not found");

    let delete = app
        .request(
            Method::DELETE,
            &format!("/programs/{}", uuid::Uuid::new_v4()),
            None,
            None,
        )
        .await;
    assert_error(&delete, StatusCode::NOT_FOUND, "NotFound", "Program not found");
}

#[tokio::test]
async fn test_delete_program() {
    let app = TestApp::new();
    let id = create_program(&app, json!({ "name": "Gone" })).await;

    let deleted = app
        .request(Method::DELETE, &format!("/programs/{}", id), None, None)
        .await;
    assert_eq!(deleted.body, json!({ "message": "Deleted" }));
    assert_eq!(app.get("/programs").await.body, json!([]));
}
