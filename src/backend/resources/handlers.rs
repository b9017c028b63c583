/**
 * Resource Handlers
 *
 * - GET /resources
 * - POST /resources
 * - PUT /resources/{id}
 * - DELETE /resources/{id}
 *
 * Mutations pass through `WriteAccess`, which is a no-op under the
 * permissive policy.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::{parse_id, WriteAccess};
use crate::backend::resources::db;
use crate::backend::server::state::AppState;
use crate::shared::{MessageResponse, NewResource, Resource, ResourceChanges};

const ENTITY: &str = "Resource";

pub async fn list_resources(State(state): State<AppState>) -> Result<Json<Vec<Resource>>, BackendError> {
    let pool = state.pool().await?;
    let resources = db::list_resources(pool).await?;
    Ok(Json(resources))
}

/// Create a resource
///
/// # Errors
/// * `400 Validation` - title missing or blank
pub async fn create_resource(
    State(state): State<AppState>,
    WriteAccess(caller): WriteAccess,
    payload: Result<Json<NewResource>, JsonRejection>,
) -> Result<Json<Resource>, BackendError> {
    let Json(fields) = payload?;
    fields.validate()?;

    let pool = state.pool().await?;
    let resource = db::create_resource(pool, &fields).await?;

    tracing::info!(
        "Resource created: {} by {}",
        resource.id,
        caller.map_or_else(|| "anonymous".to_string(), |c| c.user_id.to_string())
    );
    Ok(Json(resource))
}

/// Update a resource; absent fields are left as they are
///
/// # Errors
/// * `400 Validation` - title present but blank
/// * `404 NotFound` - unknown id
pub async fn update_resource(
    State(state): State<AppState>,
    WriteAccess(_caller): WriteAccess,
    Path(id): Path<String>,
    payload: Result<Json<ResourceChanges>, JsonRejection>,
) -> Result<Json<Resource>, BackendError> {
    let id = parse_id(&id, ENTITY)?;
    let Json(changes) = payload?;
    changes.validate()?;

    let pool = state.pool().await?;
    db::update_resource(pool, id, &changes)
        .await?
        .map(Json)
        .ok_or(BackendError::not_found(ENTITY))
}

pub async fn delete_resource(
    State(state): State<AppState>,
    WriteAccess(_caller): WriteAccess,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = parse_id(&id, ENTITY)?;
    let pool = state.pool().await?;

    if !db::delete_resource(pool, id).await? {
        return Err(BackendError::not_found(ENTITY));
    }

    tracing::info!("Resource deleted: {}", id);
    Ok(Json(MessageResponse {
        message: "Deleted".to_string(),
    }))
}
