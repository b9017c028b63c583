/**
 * Server Initialization
 *
 * Builds the application state from configuration and wires the router.
 *
 * # Initialization Process
 *
 * 1. Warn about insecure defaults (fallback signing secret, permissive policy)
 * 2. Create `AppState`
 * 3. Warm the database pool (connect + migrate)
 * 4. Create the router
 *
 * A database that cannot be reached at startup does not stop the server.
 * The failure is logged and the next request that needs storage retries.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{AuthPolicy, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing wellness portal backend");

    if config.uses_fallback_secret() {
        tracing::warn!("JWT_SECRET is not set; tokens are signed with the well-known fallback secret");
    }
    if config.auth_policy == AuthPolicy::Permissive {
        tracing::warn!(
            "AUTH_POLICY is permissive: anonymous callers may modify resources/programs and join programs"
        );
    }
    if config.seed_key.is_none() {
        tracing::info!("SEED_KEY is not set; /seed will refuse all requests");
    }

    let app_state = AppState::new(config);

    if let Err(e) = app_state.db.pool().await {
        tracing::error!("Database unavailable at startup: {}", e);
        tracing::warn!("Continuing; storage will be retried on the next request");
    }

    create_router(app_state)
}
