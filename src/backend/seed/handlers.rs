/**
 * Seed Handler
 *
 * POST /seed
 *
 * The key may arrive as the `x-seed-key` header, the `seedKey` query
 * parameter or a `{"seedKey": ...}` body, checked in that order. With no
 * `SEED_KEY` configured every request is refused.
 */

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::HeaderMap,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::seed::{seed_demo_data, SEED_COMPLETE_MESSAGE};
use crate::backend::server::state::AppState;
use crate::shared::{SeedRequest, SeedResponse};

pub const SEED_KEY_HEADER: &str = "x-seed-key";

/// Pick the first key the caller supplied
fn incoming_key(headers: &HeaderMap, query: Option<SeedRequest>, body: &[u8]) -> Option<String> {
    let from_header = headers
        .get(SEED_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    from_header
        .or_else(|| query.and_then(|q| q.seed_key))
        .or_else(|| {
            serde_json::from_slice::<SeedRequest>(body)
                .ok()
                .and_then(|b| b.seed_key)
        })
        .filter(|key| !key.is_empty())
}

/// Seed handler
///
/// # Errors
/// * `403 Forbidden` - no key configured, or a missing/incorrect key
pub async fn seed(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<SeedRequest>, QueryRejection>,
    body: Bytes,
) -> Result<Json<SeedResponse>, BackendError> {
    let supplied = incoming_key(&headers, query.ok().map(|Query(q)| q), &body);

    let authorized = match (state.config.seed_key.as_deref(), supplied.as_deref()) {
        (Some(expected), Some(given)) => expected == given,
        _ => false,
    };
    if !authorized {
        tracing::warn!("Seed request refused: invalid seed key");
        return Err(BackendError::forbidden("Forbidden: invalid seed key"));
    }

    let pool = state.pool().await?;
    let report = seed_demo_data(pool).await?;

    tracing::info!(
        "Seed complete: {} users, {} resources, {} programs created",
        report.users_created,
        report.resources_created,
        report.programs_created
    );

    Ok(Json(SeedResponse {
        ok: true,
        message: SEED_COMPLETE_MESSAGE.to_string(),
    }))
}
