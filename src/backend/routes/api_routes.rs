/**
 * API Route Table
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 * - `GET /auth/me` - Current user (requires token)
 *
 * ## Resources
 * - `GET /resources`, `POST /resources`
 * - `PUT /resources/{id}`, `DELETE /resources/{id}`
 *
 * ## Programs
 * - `GET /programs`, `POST /programs`
 * - `PUT /programs/{id}`, `DELETE /programs/{id}`
 * - `POST /programs/{id}/join`
 *
 * ## Maintenance
 * - `GET /health`
 * - `POST /seed` (requires seed key)
 */

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::backend::auth::{get_me, login, register};
use crate::backend::programs::{create_program, delete_program, join_program, list_programs, update_program};
use crate::backend::resources::{create_resource, delete_resource, list_resources, update_resource};
use crate::backend::seed::seed;
use crate::backend::server::state::AppState;

/// Configure portal routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with all portal routes configured
///
/// # Authentication
///
/// `/auth/me` always requires a token. Catalog mutations and join depend on
/// the configured auth policy. Everything else is public.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/health", get(health))
        // Authentication endpoints
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_me))
        // Resource catalog
        .route("/resources", get(list_resources).post(create_resource))
        .route("/resources/{id}", put(update_resource).delete(delete_resource))
        // Programs
        .route("/programs", get(list_programs).post(create_program))
        .route("/programs/{id}", put(update_program).delete(delete_program))
        .route("/programs/{id}/join", post(join_program))
        // Demo data
        .route("/seed", post(seed))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
