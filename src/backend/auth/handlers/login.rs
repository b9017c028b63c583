/**
 * Login Handler
 *
 * POST /auth/login
 *
 * # Authentication Process
 *
 * 1. Look up user by email (exact match)
 * 2. Verify password using bcrypt
 * 3. Issue a token
 * 4. Return token and redacted user
 *
 * An unknown email and a wrong password produce the same `InvalidCredentials`
 * error so the response does not reveal which accounts exist.
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};

use crate::backend::auth::handlers::register::present;
use crate::backend::auth::users::{get_user_by_email, verify_password};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `400 MissingFields` - email or password absent
/// * `400 InvalidCredentials` - unknown email or wrong password
/// * `500 Internal` - storage or signing failure
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;

    let (email, password) = match (present(request.email), present(request.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(BackendError::MissingFields),
    };

    let pool = state.pool().await?;

    let user = get_user_by_email(pool, &email).await?.ok_or_else(|| {
        tracing::warn!("Login failed: no account for {}", email);
        BackendError::InvalidCredentials
    })?;

    let valid = verify_password(&password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error for user {}: {:?}", user.id, e);
        BackendError::from(e)
    })?;

    if !valid {
        tracing::warn!("Login failed: wrong password for {}", email);
        return Err(BackendError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id, user.role)?;

    tracing::info!("User logged in: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.to_public(),
    }))
}
