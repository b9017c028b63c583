//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── me.rs        - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register
//! - **`login`** - POST /auth/login
//! - **`get_me`** - GET /auth/me
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → user created (student) → token returned
//! 2. **Login**: email, password → credentials verified → token returned
//! 3. **Me**: token → verified → redacted user returned

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;
