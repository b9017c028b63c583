//! Middleware Module
//!
//! Request extractors that establish who is calling and whether the
//! configured policy lets them through.
//!
//! # Example
//!
//! ```rust,no_run
//! use wellness_portal::backend::middleware::{AuthUser, WriteAccess};
//!
//! // async fn me(AuthUser(user): AuthUser) -> ... { }
//! // async fn create(WriteAccess(caller): WriteAccess, ...) -> ... { }
//! ```

pub mod auth;

/// Path parameter parsing
pub mod path;

pub use auth::{
    authenticate, bearer_token, AuthUser, AuthenticatedUser, JoinAccess, MaybeUser, WriteAccess,
};
pub use path::parse_id;
