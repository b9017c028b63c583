//! In-process test application
//!
//! Each `TestApp` owns a fresh in-memory database, so tests never share
//! state.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use wellness_portal::backend::routes::create_router;
use wellness_portal::backend::server::{AppState, AuthPolicy, Database, ServerConfig};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const TEST_SEED_KEY: &str = "integration-seed-key";

/// Response with the body parsed as JSON (`Null` when empty)
#[derive(Debug, Clone)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub fn test_config(policy: AuthPolicy) -> ServerConfig {
    ServerConfig {
        jwt_secret: Some(TEST_JWT_SECRET.to_string()),
        seed_key: Some(TEST_SEED_KEY.to_string()),
        auth_policy: policy,
        ..ServerConfig::default()
    }
}

#[derive(Clone)]
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    /// Permissive policy, the shipped default
    pub fn new() -> Self {
        Self::with_config(test_config(AuthPolicy::Permissive))
    }

    pub fn enforced() -> Self {
        Self::with_config(test_config(AuthPolicy::Enforced))
    }

    pub fn with_config(config: ServerConfig) -> Self {
        let state = AppState::with_database(config, Database::in_memory());
        let router = create_router(state.clone());
        Self { state, router }
    }

    pub async fn pool(&self) -> &SqlitePool {
        self.state.db.pool().await.expect("test database")
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, body }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body), None).await
    }
}
