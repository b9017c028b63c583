/**
 * Resource Database Operations
 */

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{NewResource, Resource, ResourceChanges};

const RESOURCE_COLUMNS: &str =
    "id, title, description, category, link, created_by, created_at, updated_at";

/// All resources, most recent first
pub async fn list_resources(pool: &SqlitePool) -> Result<Vec<Resource>, sqlx::Error> {
    let query = format!(
        "SELECT {RESOURCE_COLUMNS} FROM resources ORDER BY created_at DESC, rowid DESC"
    );
    sqlx::query_as::<_, Resource>(&query).fetch_all(pool).await
}

/// Insert a resource
///
/// The caller must have validated `fields` (title present).
pub async fn create_resource(pool: &SqlitePool, fields: &NewResource) -> Result<Resource, sqlx::Error> {
    let now = Utc::now();
    let query = format!(
        r#"
        INSERT INTO resources (id, title, description, category, link, created_by, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6, ?6)
        RETURNING {RESOURCE_COLUMNS}
        "#
    );

    sqlx::query_as::<_, Resource>(&query)
        .bind(Uuid::new_v4())
        .bind(fields.title.as_deref().map(str::trim))
        .bind(&fields.description)
        .bind(&fields.category)
        .bind(&fields.link)
        .bind(now)
        .fetch_one(pool)
        .await
}

/// Apply a partial update
///
/// # Returns
/// The updated resource, or None if no resource has this id
pub async fn update_resource(
    pool: &SqlitePool,
    id: Uuid,
    changes: &ResourceChanges,
) -> Result<Option<Resource>, sqlx::Error> {
    let query = format!(
        r#"
        UPDATE resources
        SET title = COALESCE(?2, title),
            description = COALESCE(?3, description),
            category = COALESCE(?4, category),
            link = COALESCE(?5, link),
            updated_at = ?6
        WHERE id = ?1
        RETURNING {RESOURCE_COLUMNS}
        "#
    );

    sqlx::query_as::<_, Resource>(&query)
        .bind(id)
        .bind(changes.title.as_deref().map(str::trim))
        .bind(&changes.description)
        .bind(&changes.category)
        .bind(&changes.link)
        .bind(Utc::now())
        .fetch_optional(pool)
        .await
}

/// Delete a resource
///
/// # Returns
/// Whether a row was removed
pub async fn delete_resource(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resources WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_resources(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM resources")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
