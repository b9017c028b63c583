/**
 * Register Handler
 *
 * POST /auth/register
 *
 * # Registration Process
 *
 * 1. Require email and password
 * 2. Refuse an email that is already on file
 * 3. Hash password using bcrypt (cost 10)
 * 4. Create user with the student role
 * 5. Issue a token and return it with the redacted user
 *
 * The email check and the insert are separate statements, so a concurrent
 * registration can still lose at the UNIQUE constraint. That case is
 * reported as `EmailTaken` as well.
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};

use crate::backend::auth::users::{create_user, get_user_by_email, hash_password, is_unique_violation};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, RegisterRequest, Role};

/// Register handler
///
/// # Errors
///
/// * `400 MissingFields` - email or password absent or empty
/// * `400 EmailTaken` - a user with this email exists
/// * `500 Internal` - storage, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "A", "email": "a@x.com", "password": "secret1"}
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;

    let (email, password) = match (present(request.email), present(request.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            tracing::warn!("Registration rejected: missing fields");
            return Err(BackendError::MissingFields);
        }
    };

    let pool = state.pool().await?;

    if get_user_by_email(pool, &email).await?.is_some() {
        tracing::warn!("Registration rejected: email already registered: {}", email);
        return Err(BackendError::EmailTaken);
    }

    let password_hash = hash_password(&password).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::from(e)
    })?;

    let user = create_user(pool, request.name.as_deref(), &email, &password_hash, Role::Student)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Registration lost race for email: {}", email);
                BackendError::EmailTaken
            } else {
                BackendError::from(e)
            }
        })?;

    let token = state.tokens.issue(user.id, user.role)?;

    tracing::info!("User registered: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.to_public(),
    }))
}

pub(super) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
