/**
 * Program Handlers
 *
 * - GET /programs
 * - POST /programs
 * - PUT /programs/{id}
 * - DELETE /programs/{id}
 * - POST /programs/{id}/join
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::{parse_id, JoinAccess, WriteAccess};
use crate::backend::programs::db::{self, ProgramUpdate};
use crate::backend::programs::enrollment;
use crate::backend::server::state::AppState;
use crate::shared::{JoinResponse, MessageResponse, NewProgram, Program, ProgramChanges};

const ENTITY: &str = "Program";

pub async fn list_programs(State(state): State<AppState>) -> Result<Json<Vec<Program>>, BackendError> {
    let pool = state.pool().await?;
    Ok(Json(db::list_programs(pool).await?))
}

/// Create a program
///
/// Any `enrolled` value in the body is ignored; capacity defaults to 30.
///
/// # Errors
/// * `400 Validation` - capacity below 1
pub async fn create_program(
    State(state): State<AppState>,
    WriteAccess(_caller): WriteAccess,
    payload: Result<Json<NewProgram>, JsonRejection>,
) -> Result<Json<Program>, BackendError> {
    let Json(fields) = payload?;
    fields.validate()?;

    let pool = state.pool().await?;
    let program = db::create_program(pool, &fields).await?;

    tracing::info!("Program created: {} (capacity {})", program.id, program.capacity);
    Ok(Json(program))
}

/// Update a program's descriptive fields or capacity
///
/// # Errors
/// * `400 Validation` - capacity below 1 or below the current enrolled count
/// * `404 NotFound` - unknown id
pub async fn update_program(
    State(state): State<AppState>,
    WriteAccess(_caller): WriteAccess,
    Path(id): Path<String>,
    payload: Result<Json<ProgramChanges>, JsonRejection>,
) -> Result<Json<Program>, BackendError> {
    let id = parse_id(&id, ENTITY)?;
    let Json(changes) = payload?;
    changes.validate()?;

    let pool = state.pool().await?;
    match db::update_program(pool, id, &changes).await? {
        ProgramUpdate::Updated(program) => Ok(Json(program)),
        ProgramUpdate::NotFound => Err(BackendError::not_found(ENTITY)),
        ProgramUpdate::CapacityBelowEnrolled { enrolled } => {
            tracing::warn!("Refused capacity change for {}: {} already enrolled", id, enrolled);
            Err(BackendError::validation(format!(
                "Capacity cannot be lower than the {} already enrolled",
                enrolled
            )))
        }
    }
}

pub async fn delete_program(
    State(state): State<AppState>,
    WriteAccess(_caller): WriteAccess,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = parse_id(&id, ENTITY)?;
    let pool = state.pool().await?;

    if !db::delete_program(pool, id).await? {
        return Err(BackendError::not_found(ENTITY));
    }

    tracing::info!("Program deleted: {}", id);
    Ok(Json(MessageResponse {
        message: "Deleted".to_string(),
    }))
}

/// Join a program
///
/// Under the permissive policy the caller may be anonymous; a token that
/// verifies only labels the join in the log.
///
/// # Errors
/// * `404 NotFound` - unknown id
/// * `400 ProgramFull` - no seats left
pub async fn join_program(
    State(state): State<AppState>,
    JoinAccess(caller): JoinAccess,
    Path(id): Path<String>,
) -> Result<Json<JoinResponse>, BackendError> {
    let id = parse_id(&id, ENTITY)?;
    let pool = state.pool().await?;

    let program = enrollment::join_program(pool, id).await.map_err(|e| {
        if matches!(e, BackendError::ProgramFull) {
            tracing::info!("Join refused, program full: {}", id);
        }
        e
    })?;

    match caller {
        Some(user) => tracing::info!("User {} joined program {}", user.user_id, id),
        None => tracing::info!("Anonymous join on program {}", id),
    }

    Ok(Json(JoinResponse { ok: true, program }))
}
