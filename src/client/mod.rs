//! Client Session Module
//!
//! The client side of the portal: a typed async HTTP client, the signed-in
//! session with file persistence, and the role-based view gating.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs      - Module exports and documentation
//! ├── config.rs   - API base URL and session file location
//! ├── error.rs    - ClientError
//! ├── session.rs  - Token and user, persisted as JSON
//! ├── views.rs    - View enum, access rules, program availability
//! └── api.rs      - ApiClient
//! ```
//!
//! Enrollment shown to a user always comes from the server's `enrolled`
//! and `capacity`; the client keeps no joined markers of its own.
//!
//! # Example
//!
//! ```rust,no_run
//! use wellness_portal::client::{Access, ApiClient, ClientConfig, View};
//!
//! # async fn example() -> Result<(), wellness_portal::client::ClientError> {
//! let mut client = ApiClient::new(ClientConfig::default());
//! client.login("student@example.com", "studentpass").await?;
//! assert_eq!(client.session().resolve(View::Login), Access::Redirect(View::StudentDashboard));
//! let programs = client.list_programs().await?;
//! # let _ = programs;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod views;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use session::ClientSession;
pub use views::{resolve, Access, Availability, View};
