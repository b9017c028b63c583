//! Authentication Module
//!
//! Registration, login and token handling.
//!
//! # Architecture
//!
//! - **`users`** - User records, password hashing (the credential store)
//! - **`sessions`** - Token issue and verification
//! - **`handlers`** - HTTP handlers for `/auth/*`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10) before storage
//! - Tokens are HS256, stateless, and expire after 7 days
//! - No revocation: a token stays valid until it expires
//! - Login failures never reveal whether the email exists

/// User data model and database operations
pub mod users;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use sessions::{Claims, TokenError, TokenService};
