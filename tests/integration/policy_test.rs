//! Enforced authorization policy

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_permissive_allows_anonymous_writes() {
    let app = TestApp::new();

    let created = app.post("/programs", json!({ "name": "Open door" })).await;
    assert_ok(&created);
}

#[tokio::test]
async fn test_enforced_requires_token_for_writes() {
    let app = TestApp::enforced();

    let response = app.post("/resources", json!({ "title": "Anonymous" })).await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Unauthorized", "Missing token");
}

#[tokio::test]
async fn test_enforced_rejects_student_writes() {
    let app = TestApp::enforced();
    let student = student_user(&app).await;

    let response = app
        .request(
            Method::POST,
            "/programs",
            Some(json!({ "name": "Student made" })),
            Some(&student.token),
        )
        .await;
    assert_error(&response, StatusCode::FORBIDDEN, "Forbidden", "Admin access required");
}

#[tokio::test]
async fn test_enforced_admin_manages_catalog_and_student_joins() {
    let app = TestApp::enforced();
    let admin = admin_user(&app).await;
    let student = student_user(&app).await;

    let created = app
        .request(
            Method::POST,
            "/programs",
            Some(json!({ "name": "Meditation", "capacity": 1 })),
            Some(&admin.token),
        )
        .await;
    assert_ok(&created);
    let id = created.body["id"].as_str().unwrap().to_string();

    let anonymous_join = app
        .request(Method::POST, &format!("/programs/{}/join", id), None, None)
        .await;
    assert_eq!(anonymous_join.status, StatusCode::UNAUTHORIZED);

    let joined = app
        .request(
            Method::POST,
            &format!("/programs/{}/join", id),
            None,
            Some(&student.token),
        )
        .await;
    assert_ok(&joined);
    assert_eq!(joined.body["program"]["enrolled"], 1);
}

#[tokio::test]
async fn test_enforced_reads_stay_public() {
    let app = TestApp::enforced();

    assert_ok(&app.get("/resources").await);
    assert_ok(&app.get("/programs").await);
}
