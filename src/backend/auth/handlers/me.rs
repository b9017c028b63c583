/**
 * Current User Handler
 *
 * GET /auth/me returns the redacted view of the user the bearer token
 * belongs to. The `AuthUser` extractor does the verification; a missing,
 * expired or forged token, or one for a user that no longer exists, never
 * reaches the handler body.
 */

use axum::response::Json;

use crate::backend::middleware::AuthUser;
use crate::shared::PublicUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing/invalid token, or unknown user
pub async fn get_me(AuthUser(user): AuthUser) -> Json<PublicUser> {
    Json(user.to_public())
}
