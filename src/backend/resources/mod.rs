//! Resource Catalog
//!
//! Plain CRUD over wellness resources (articles, guides, links). The only
//! rule a resource carries is a non-empty title.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_resource, delete_resource, list_resources, update_resource};
