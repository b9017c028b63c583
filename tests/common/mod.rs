//! Common test utilities and helpers
//!
//! - `app` - in-process router with its own in-memory database
//! - `auth_helpers` - registering users and minting tokens
//! - `assertions` - response assertions

pub mod app;
pub mod assertions;
pub mod auth_helpers;

pub use app::*;
pub use assertions::*;
pub use auth_helpers::*;
