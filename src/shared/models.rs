/**
 * Portal Data Model
 *
 * Wire and storage types for the three collections (users, resources,
 * programs) plus the request/response payloads exchanged by the HTTP API.
 *
 * These types are shared by the backend handlers and the client session so
 * both sides agree on field names. JSON uses camelCase (`createdAt`,
 * `createdBy`), matching what the browser client has always read. Storage
 * columns stay snake_case through `sqlx::FromRow`.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Default seat count for a program created without an explicit capacity
pub const DEFAULT_PROGRAM_CAPACITY: i64 = 30;

/// Portal role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }
}

/// How a program is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ProgramMode {
    Online,
    #[serde(rename = "in-person")]
    #[sqlx(rename = "in-person")]
    InPerson,
    Hybrid,
}

/// Whether a program is advertised as accepting sign-ups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ProgramStatus {
    Open,
    Closed,
}

/// Redacted user view
///
/// The only user shape that ever leaves the server. Carries no password
/// material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub role: Role,
}

/// Wellness resource (article, guide, external link)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub link: Option<String>,
    /// Informational only, never enforced as ownership
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wellness program with a seat limit
///
/// `0 <= enrolled <= capacity` holds for every stored program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub name: Option<String>,
    pub category: Option<String>,
    pub schedule: Option<String>,
    pub mode: Option<ProgramMode>,
    pub status: Option<ProgramStatus>,
    pub enrolled: i64,
    pub capacity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Program {
    pub fn is_full(&self) -> bool {
        self.enrolled >= self.capacity
    }

    pub fn seats_remaining(&self) -> i64 {
        (self.capacity - self.enrolled).max(0)
    }
}

/// Registration payload
///
/// Every field is optional on the wire so that an absent email or password
/// is reported as `MissingFields` instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Returned by register and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token (7-day expiry)
    pub token: String,
    pub user: PublicUser,
}

/// Fields for a new resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewResource {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub link: Option<String>,
}

impl NewResource {
    /// Title is the one field a resource cannot exist without
    pub fn validate(&self) -> Result<(), SharedError> {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => Ok(()),
            _ => Err(SharedError::validation("title", "Title is required")),
        }
    }
}

/// Partial resource update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub link: Option<String>,
}

impl ResourceChanges {
    pub fn validate(&self) -> Result<(), SharedError> {
        match self.title.as_deref() {
            Some(title) if title.trim().is_empty() => {
                Err(SharedError::validation("title", "Title cannot be empty"))
            }
            _ => Ok(()),
        }
    }
}

/// Fields for a new program
///
/// The enrollment counter is not accepted here: new programs always start
/// at zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProgram {
    pub name: Option<String>,
    pub category: Option<String>,
    pub schedule: Option<String>,
    pub mode: Option<ProgramMode>,
    pub status: Option<ProgramStatus>,
    pub capacity: Option<i64>,
}

impl NewProgram {
    pub fn capacity_or_default(&self) -> i64 {
        self.capacity.unwrap_or(DEFAULT_PROGRAM_CAPACITY)
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        validate_capacity(self.capacity)
    }
}

/// Partial program update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub schedule: Option<String>,
    pub mode: Option<ProgramMode>,
    pub status: Option<ProgramStatus>,
    pub capacity: Option<i64>,
}

impl ProgramChanges {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_capacity(self.capacity)
    }
}

fn validate_capacity(capacity: Option<i64>) -> Result<(), SharedError> {
    match capacity {
        Some(capacity) if capacity < 1 => Err(SharedError::validation(
            "capacity",
            "Capacity must be a positive number",
        )),
        _ => Ok(()),
    }
}

/// Successful join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinResponse {
    pub ok: bool,
    pub program: Program,
}

/// Plain acknowledgement, e.g. `{"message": "Deleted"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Seed request body; the key may also arrive as a header or query parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeedRequest {
    pub seed_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedResponse {
    pub ok: bool,
    pub message: String,
}

/// Error body rendered by the server for every failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}
