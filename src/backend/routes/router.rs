/**
 * Router Configuration
 *
 * Combines the portal routes into the application router.
 *
 * # Route Layout
 *
 * The portal routes are served twice: at the root and under `/api`. Older
 * clients call `/api/...`, newer ones the bare paths.
 *
 * # Layers
 *
 * - `TraceLayer` logs each request/response through `tracing`
 * - `CorsLayer::permissive()` lets the browser client call from its own origin
 *
 * Unknown paths get a JSON 404 in the same shape as every other error.
 */

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Shared application state
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let portal = configure_api_routes(Router::new());

    Router::new()
        .merge(portal.clone())
        .nest("/api", portal)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found("Route")
}
