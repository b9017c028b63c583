//! Registration, login and profile flows

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_register_then_fetch_profile() {
    let app = TestApp::new();

    let response = app
        .post(
            "/auth/register",
            json!({ "name": "Ana", "email": "ana@example.com", "password": "p1" }),
        )
        .await;
    assert_ok(&response);
    assert_eq!(response.body["user"]["email"], "ana@example.com");
    assert_eq!(response.body["user"]["role"], "student");
    assert!(response.body["user"].get("passwordHash").is_none());
    assert!(response.body["user"].get("password_hash").is_none());

    let token = response.body["token"].as_str().unwrap();
    let me = app.request(Method::GET, "/auth/me", None, Some(token)).await;
    assert_ok(&me);
    assert_eq!(me.body["email"], "ana@example.com");
    assert_eq!(me.body["name"], "Ana");
    assert_eq!(me.body["role"], "student");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    register_user(&app, "Ana", "ana@example.com", "p1").await;

    let response = app
        .post(
            "/auth/register",
            json!({ "email": "ana@example.com", "password": "other" }),
        )
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "EmailTaken", "User exists");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new();

    let no_password = app.post("/auth/register", json!({ "email": "a@b.c" })).await;
    assert_error(&no_password, StatusCode::BAD_REQUEST, "MissingFields", "Missing fields");

    let empty_email = app
        .post("/auth/register", json!({ "email": "", "password": "p" }))
        .await;
    assert_error(&empty_email, StatusCode::BAD_REQUEST, "MissingFields", "Missing fields");
}

#[tokio::test]
async fn test_register_never_grants_admin() {
    let app = TestApp::new();

    let response = app
        .post(
            "/auth/register",
            json!({ "email": "sneaky@example.com", "password": "p", "role": "admin" }),
        )
        .await;
    assert_ok(&response);
    assert_eq!(response.body["user"]["role"], "student");
}

#[tokio::test]
async fn test_login_success_and_failures() {
    let app = TestApp::new();
    let user = register_user(&app, "Ana", "ana@example.com", "p1").await;

    let ok = app
        .post("/auth/login", json!({ "email": "ana@example.com", "password": "p1" }))
        .await;
    assert_ok(&ok);
    assert_eq!(ok.body["user"]["id"], user.id.as_str());

    let wrong_password = app
        .post("/auth/login", json!({ "email": "ana@example.com", "password": "nope" }))
        .await;
    assert_error(
        &wrong_password,
        StatusCode::BAD_REQUEST,
        "InvalidCredentials",
        "Invalid credentials",
    );

    let unknown = app
        .post("/auth/login", json!({ "email": "ghost@example.com", "password": "p1" }))
        .await;
    assert_eq!(unknown.body, wrong_password.body);
}

#[tokio::test]
async fn test_me_rejects_missing_and_bad_tokens() {
    let app = TestApp::new();

    let missing = app.get("/auth/me").await;
    assert_error(&missing, StatusCode::UNAUTHORIZED, "Unauthorized", "Missing token");

    let garbage = app
        .request(Method::GET, "/auth/me", None, Some("not-a-jwt"))
        .await;
    assert_error(&garbage, StatusCode::UNAUTHORIZED, "Unauthorized", "Invalid token");
}

#[tokio::test]
async fn test_me_rejects_token_from_another_secret() {
    let app = TestApp::new();
    let other = TestApp::with_config(wellness_portal::backend::server::ServerConfig {
        jwt_secret: Some("some-other-secret".to_string()),
        ..test_config(Default::default())
    });
    let foreign = register_user(&other, "Eve", "eve@example.com", "p").await;

    let response = app
        .request(Method::GET, "/auth/me", None, Some(&foreign.token))
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Unauthorized", "Invalid token");
}

#[tokio::test]
async fn test_me_rejects_token_for_unknown_user() {
    let app = TestApp::new();
    let token = app
        .state
        .tokens
        .issue(uuid::Uuid::new_v4(), wellness_portal::shared::Role::Admin)
        .unwrap();

    let response = app.request(Method::GET, "/auth/me", None, Some(&token)).await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Unauthorized", "User not found");
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Validation");
}
