//! Backend Module
//!
//! All server-side code for the wellness portal: an Axum HTTP server over a
//! SQLite store.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, database handle, application state
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Register/login/me, password hashing, bearer tokens
//! - **`middleware`** - Token extraction and authorization gates
//! - **`resources`** - Resource catalog CRUD
//! - **`programs`** - Program CRUD and capacity-bounded enrollment
//! - **`seed`** - Idempotent demo data, guarded by a seed key
//! - **`error`** - Backend error taxonomy and JSON rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - wellness-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! ├── resources/      - Resource catalog
//! ├── programs/       - Programs and enrollment
//! ├── seed/           - Demo data
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the loaded configuration, the lazily-initialized
//! database pool and the token service. Everything in it is cheap to clone
//! and shared across handlers through Axum's `State` extractor.
//!
//! # Concurrency
//!
//! Handlers never read-modify-write shared counters in memory. Seat
//! accounting happens in a single conditional `UPDATE`, so simultaneous
//! joins against the last seat produce exactly one success.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Request extractors for authentication and authorization
pub mod middleware;

/// Resource catalog
pub mod resources;

/// Programs and enrollment
pub mod programs;

/// Demo data seeding
pub mod seed;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
