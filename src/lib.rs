//! Wellness Portal - Main Library
//!
//! Backend and client session for a student wellness portal: accounts with
//! a student/admin role, a catalog of wellness resources, and programs with
//! a seat limit that students can join.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between server and client
//!   - Users, resources, programs and their request/response payloads
//!   - Shared validation error type
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, token service, password hashing
//!   - SQLite persistence and the atomic enrollment update
//!   - Demo data seeding
//!
//! - **`client`** - Client-side session
//!   - Token persistence across restarts
//!   - Role-based view gating
//!   - Typed HTTP API wrapper
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend module and the `wellness-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use wellness_portal::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let addr = config.bind_address();
//! let app = create_app(config).await;
//! let listener = tokio::net::TcpListener::bind(addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for payload validation
//! - `backend::error::BackendError` for everything a handler can fail with
//! - `client::ClientError` for transport and API failures seen by the client

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Client session, view gating and API wrapper
pub mod client;
