//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, /api mirror, layers, fallback
//! └── api_routes.rs   - Portal route table
//! ```

/// Main router creation
pub mod router;

/// Portal endpoints
pub mod api_routes;

pub use router::create_router;
