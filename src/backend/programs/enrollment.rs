/**
 * Enrollment Engine
 *
 * Joining a program takes one seat. The capacity check and the increment
 * are a single conditional `UPDATE`, so the database serializes competing
 * joins: with one seat left and any number of simultaneous callers, exactly
 * one succeeds and the rest see `ProgramFull`. `enrolled` never exceeds
 * `capacity` and never goes down (there is no leave operation).
 *
 * When the update matches no row, a follow-up read decides whether the
 * program is missing or full.
 */

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::programs::db::{get_program, PROGRAM_COLUMNS};
use crate::shared::Program;

/// Take one seat in a program
///
/// # Returns
/// The program with its incremented `enrolled`
///
/// # Errors
/// * `NotFound` - no program with this id
/// * `ProgramFull` - `enrolled >= capacity` at write time
pub async fn join_program(pool: &SqlitePool, id: Uuid) -> Result<Program, BackendError> {
    let query = format!(
        r#"
        UPDATE programs
        SET enrolled = enrolled + 1, updated_at = ?2
        WHERE id = ?1 AND enrolled < capacity
        RETURNING {PROGRAM_COLUMNS}
        "#
    );

    let joined = sqlx::query_as::<_, Program>(&query)
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(pool)
        .await?;

    if let Some(program) = joined {
        return Ok(program);
    }

    match get_program(pool, id).await? {
        Some(_) => Err(BackendError::ProgramFull),
        None => Err(BackendError::not_found("Program")),
    }
}
