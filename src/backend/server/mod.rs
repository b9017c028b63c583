//! Server Module
//!
//! Configuration, database handle, application state and app creation.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - ServerConfig loading (defaults, TOML file, env)
//! ├── database.rs     - Lazily-initialized SQLite pool
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Example
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

/// Application state
pub mod state;

/// Configuration loading
pub mod config;

/// Database pool handle
pub mod database;

/// Server initialization
pub mod init;

pub use config::{AuthPolicy, ConfigError, ServerConfig};
pub use database::Database;
pub use init::create_app;
pub use state::AppState;
