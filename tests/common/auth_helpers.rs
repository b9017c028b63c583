//! Authentication test helpers

use serde_json::{json, Value};
use wellness_portal::backend::auth::users::{create_user, hash_password};
use wellness_portal::shared::Role;

use super::app::TestApp;

/// A registered test user
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register through the API and return the issued token
pub async fn register_user(app: &TestApp, name: &str, email: &str, password: &str) -> TestUser {
    let response = app
        .post(
            "/auth/register",
            json!({ "name": name, "email": email, "password": password }),
        )
        .await;
    assert_eq!(response.status, 200, "register failed: {:?}", response.body);
    from_auth_body(&response.body, password)
}

/// Create a user straight in storage with the given role
pub async fn create_user_with_role(app: &TestApp, email: &str, password: &str, role: Role) -> TestUser {
    let hash = hash_password(password).expect("hash");
    let user = create_user(app.pool().await, Some("Test"), email, &hash, role)
        .await
        .expect("create user");
    let token = app.state.tokens.issue(user.id, role).expect("token");
    TestUser {
        id: user.id.to_string(),
        email: user.email,
        password: password.to_string(),
        token,
    }
}

pub async fn admin_user(app: &TestApp) -> TestUser {
    create_user_with_role(app, "admin@test.local", "adminpass", Role::Admin).await
}

pub async fn student_user(app: &TestApp) -> TestUser {
    create_user_with_role(app, "student@test.local", "studentpass", Role::Student).await
}

fn from_auth_body(body: &Value, password: &str) -> TestUser {
    TestUser {
        id: body["user"]["id"].as_str().expect("user id").to_string(),
        email: body["user"]["email"].as_str().expect("email").to_string(),
        password: password.to_string(),
        token: body["token"].as_str().expect("token").to_string(),
    }
}
