/**
 * Authentication Extractors
 *
 * Bearer-token extraction and the authorization gates applied to the
 * catalog and join endpoints.
 *
 * # Extractors
 *
 * - `AuthUser` - a valid token for a user that still exists, or 401
 * - `MaybeUser` - the token's identity if it verifies, otherwise anonymous
 * - `WriteAccess` - resource/program mutations
 * - `JoinAccess` - program join
 *
 * `WriteAccess` and `JoinAccess` follow the configured `AuthPolicy`. Under
 * `Permissive` they behave like `MaybeUser` and never reject. Under
 * `Enforced`, `JoinAccess` requires any valid user and `WriteAccess`
 * requires an admin (403 for a valid non-admin).
 */

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::BackendError;
use crate::backend::server::config::AuthPolicy;
use crate::backend::server::state::AppState;
use crate::shared::Role;

/// Caller identity established from a bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verify the token cryptographically, without touching storage
fn identify(state: &AppState, headers: &HeaderMap) -> Result<AuthenticatedUser, BackendError> {
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::unauthorized("Missing token")
    })?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        match e {
            TokenError::Expired => BackendError::unauthorized("Token expired"),
            _ => BackendError::unauthorized("Invalid token"),
        }
    })?;

    let user_id = claims.user_id().map_err(|_| {
        tracing::warn!("Token subject is not a user id");
        BackendError::unauthorized("Invalid token")
    })?;

    Ok(AuthenticatedUser {
        user_id,
        role: claims.role,
    })
}

/// Verify the token and confirm the user still exists
///
/// The role is taken from storage so a demoted admin loses access without
/// waiting for the token to expire.
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<User, BackendError> {
    let identity = identify(state, headers)?;
    let pool = state.pool().await?;
    verify_user_exists(pool, identity.user_id).await
}

/// Verify user exists in database
async fn verify_user_exists(pool: &SqlitePool, user_id: Uuid) -> Result<User, BackendError> {
    get_user_by_id(pool, user_id).await?.ok_or_else(|| {
        tracing::warn!("Token refers to unknown user {}", user_id);
        BackendError::unauthorized("User not found")
    })
}

fn identity_of(user: &User) -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: user.id,
        role: user.role,
    }
}

/// Required authentication
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authenticate(state, &parts.headers).await.map(AuthUser)
    }
}

/// Opportunistic authentication; never rejects
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if bearer_token(&parts.headers).is_none() {
            return Ok(MaybeUser(None));
        }
        match identify(state, &parts.headers) {
            Ok(user) => Ok(MaybeUser(Some(user))),
            Err(_) => {
                tracing::debug!("Ignoring unverifiable token on anonymous-capable route");
                Ok(MaybeUser(None))
            }
        }
    }
}

/// Gate for creating, updating and deleting resources and programs
#[derive(Clone, Debug)]
pub struct WriteAccess(pub Option<AuthenticatedUser>);

impl FromRequestParts<AppState> for WriteAccess {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match state.auth_policy() {
            AuthPolicy::Permissive => {
                let MaybeUser(user) = MaybeUser::from_request_parts(parts, state).await.unwrap_or(MaybeUser(None));
                Ok(WriteAccess(user))
            }
            AuthPolicy::Enforced => {
                let user = authenticate(state, &parts.headers).await?;
                if user.role != Role::Admin {
                    tracing::warn!("Non-admin user {} attempted a catalog change", user.id);
                    return Err(BackendError::forbidden("Admin access required"));
                }
                Ok(WriteAccess(Some(identity_of(&user))))
            }
        }
    }
}

/// Gate for joining a program
#[derive(Clone, Debug)]
pub struct JoinAccess(pub Option<AuthenticatedUser>);

impl FromRequestParts<AppState> for JoinAccess {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match state.auth_policy() {
            AuthPolicy::Permissive => {
                let MaybeUser(user) = MaybeUser::from_request_parts(parts, state).await.unwrap_or(MaybeUser(None));
                Ok(JoinAccess(user))
            }
            AuthPolicy::Enforced => {
                let user = authenticate(state, &parts.headers).await?;
                Ok(JoinAccess(Some(identity_of(&user))))
            }
        }
    }
}
