/**
 * Backend Error Types
 *
 * Every handler returns `Result<_, BackendError>`. The variants map one to
 * one onto the failure kinds the portal exposes to its client.
 *
 * # Error Categories
 *
 * ## Validation (400)
 *
 * - `MissingFields` - email or password absent on register/login
 * - `Validation` - malformed body or a field that breaks an entity rule
 *
 * ## Authentication (400/401/403)
 *
 * - `EmailTaken` - registration with an email already on file
 * - `InvalidCredentials` - unknown email OR wrong password (same message)
 * - `Unauthorized` - missing/invalid bearer token where one is required
 * - `Forbidden` - bad seed key, or a non-admin under the enforced policy
 *
 * ## Lookup and capacity
 *
 * - `NotFound` (404)
 * - `ProgramFull` (400)
 *
 * ## Internal (500)
 *
 * Storage, hashing and signing failures. The response only says
 * "Internal server error"; the detail goes to the log.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::shared::SharedError;

/// Message returned for every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use wellness_portal::backend::error::BackendError;
///
/// let err = BackendError::validation("Capacity must be a positive number");
/// assert_eq!(err.status_code().as_u16(), 400);
///
/// let err = BackendError::not_found("Program");
/// assert_eq!(err.message(), "Program not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Missing fields")]
    MissingFields,

    #[error("User exists")]
    EmailTaken,

    /// Shared by the unknown-email and wrong-password paths of login
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    #[error("{message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    #[error("{message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    #[error("{entity} not found")]
    NotFound {
        /// Kind of entity that was looked up
        entity: &'static str,
    },

    #[error("Program full")]
    ProgramFull,

    /// Validation failure raised by a shared payload type
    #[error(transparent)]
    Shared(#[from] SharedError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token could not be issued. Verification failures are mapped to
    /// `Unauthorized` by the caller instead.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields
            | Self::EmailTaken
            | Self::InvalidCredentials
            | Self::Validation { .. }
            | Self::ProgramFull
            | Self::Shared(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable kind, rendered as the `error` field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields => "MissingFields",
            Self::EmailTaken => "EmailTaken",
            Self::InvalidCredentials => "InvalidCredentials",
            Self::Validation { .. } => "Validation",
            Self::Unauthorized { .. } => "Unauthorized",
            Self::Forbidden { .. } => "Forbidden",
            Self::NotFound { .. } => "NotFound",
            Self::ProgramFull => "ProgramFull",
            Self::Shared(SharedError::ValidationError { .. }) => "Validation",
            Self::Database(_)
            | Self::PasswordHash(_)
            | Self::Token(_) => "Internal",
        }
    }

    /// Message safe to show to the caller
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}
