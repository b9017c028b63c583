//! Route table, `/api` mirror and fallback

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_ok(&response);
    assert_eq!(response.body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_api_prefix_mirrors_root_routes() {
    let app = TestApp::new();

    let created = app.post("/api/resources", json!({ "title": "Mirrored" })).await;
    assert_ok(&created);

    let root = app.get("/resources").await;
    let prefixed = app.get("/api/resources").await;
    assert_eq!(root.body, prefixed.body);
    assert_eq!(root.body[0]["title"], "Mirrored");

    let user = register_user(&app, "Ana", "ana@example.com", "p1").await;
    let login = app
        .post(
            "/api/auth/login",
            json!({ "email": user.email, "password": user.password }),
        )
        .await;
    assert_ok(&login);
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let app = TestApp::new();

    let response = app.get("/does-not-exist").await;
    assert_error(&response, StatusCode::NOT_FOUND, "NotFound", "Route not found");
}

#[tokio::test]
async fn test_repeated_lists_without_writes_are_identical() {
    let app = TestApp::new();
    for title in ["Sleep", "Hydration", "Breathing", "Stretching"] {
        assert_ok(&app.post("/resources", json!({ "title": title })).await);
    }
    for (name, capacity) in [("Yoga", 10), ("Spin", 5), ("Meditation", 20)] {
        assert_ok(&app.post("/programs", json!({ "name": name, "capacity": capacity })).await);
    }

    let first_resources = app.get("/resources").await;
    let second_resources = app.get("/resources").await;
    assert_eq!(first_resources.body.as_array().unwrap().len(), 4);
    assert_eq!(first_resources.body, second_resources.body);

    let first_programs = app.get("/programs").await;
    let second_programs = app.get("/programs").await;
    assert_eq!(first_programs.body.as_array().unwrap().len(), 3);
    assert_eq!(first_programs.body, second_programs.body);
}
