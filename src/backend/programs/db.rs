/**
 * Program Database Operations
 *
 * Everything except the seat counter. `enrolled` is written only by
 * `programs::enrollment`; create always starts it at zero and update never
 * touches it.
 */

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{NewProgram, Program, ProgramChanges};

pub(crate) const PROGRAM_COLUMNS: &str =
    "id, name, category, schedule, mode, status, enrolled, capacity, created_at, updated_at";

/// Result of a program update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramUpdate {
    Updated(Program),
    NotFound,
    /// The new capacity would leave more people enrolled than seats
    CapacityBelowEnrolled { enrolled: i64 },
}

/// All programs, most recent first
pub async fn list_programs(pool: &SqlitePool) -> Result<Vec<Program>, sqlx::Error> {
    let query = format!("SELECT {PROGRAM_COLUMNS} FROM programs ORDER BY created_at DESC, rowid DESC");
    sqlx::query_as::<_, Program>(&query).fetch_all(pool).await
}

pub async fn get_program(pool: &SqlitePool, id: Uuid) -> Result<Option<Program>, sqlx::Error> {
    let query = format!("SELECT {PROGRAM_COLUMNS} FROM programs WHERE id = ?1");
    sqlx::query_as::<_, Program>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a program with zero enrolled
///
/// The caller must have validated `fields` (capacity >= 1 when given).
pub async fn create_program(pool: &SqlitePool, fields: &NewProgram) -> Result<Program, sqlx::Error> {
    let query = format!(
        r#"
        INSERT INTO programs (id, name, category, schedule, mode, status, enrolled, capacity, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7, ?8, ?8)
        RETURNING {PROGRAM_COLUMNS}
        "#
    );

    sqlx::query_as::<_, Program>(&query)
        .bind(Uuid::new_v4())
        .bind(&fields.name)
        .bind(&fields.category)
        .bind(&fields.schedule)
        .bind(fields.mode)
        .bind(fields.status)
        .bind(fields.capacity_or_default())
        .bind(Utc::now())
        .fetch_one(pool)
        .await
}

/// Apply a partial update in one conditional statement
///
/// A capacity change is only written if it stays at or above the current
/// enrolled count, checked against the row as it is at write time.
pub async fn update_program(
    pool: &SqlitePool,
    id: Uuid,
    changes: &ProgramChanges,
) -> Result<ProgramUpdate, sqlx::Error> {
    let query = format!(
        r#"
        UPDATE programs
        SET name = COALESCE(?2, name),
            category = COALESCE(?3, category),
            schedule = COALESCE(?4, schedule),
            mode = COALESCE(?5, mode),
            status = COALESCE(?6, status),
            capacity = COALESCE(?7, capacity),
            updated_at = ?8
        WHERE id = ?1 AND enrolled <= COALESCE(?7, capacity)
        RETURNING {PROGRAM_COLUMNS}
        "#
    );

    let updated = sqlx::query_as::<_, Program>(&query)
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.category)
        .bind(&changes.schedule)
        .bind(changes.mode)
        .bind(changes.status)
        .bind(changes.capacity)
        .bind(Utc::now())
        .fetch_optional(pool)
        .await?;

    if let Some(program) = updated {
        return Ok(ProgramUpdate::Updated(program));
    }

    Ok(match get_program(pool, id).await? {
        Some(existing) => ProgramUpdate::CapacityBelowEnrolled {
            enrolled: existing.enrolled,
        },
        None => ProgramUpdate::NotFound,
    })
}

/// Delete a program
///
/// # Returns
/// Whether a row was removed
pub async fn delete_program(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM programs WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_programs(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM programs")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
