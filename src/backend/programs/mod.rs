//! Programs and Enrollment
//!
//! Wellness programs with a seat limit. Catalog maintenance lives in `db`
//! and `handlers`; the seat counter is owned by `enrollment`.
//!
//! # Invariant
//!
//! `0 <= enrolled <= capacity` after every write. Create starts at zero,
//! join increments only while a seat is free, and a capacity update may not
//! drop below the current count. The table's CHECK constraint backs all
//! three.

/// Database operations
pub mod db;

/// Capacity-bounded join
pub mod enrollment;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_program, delete_program, join_program, list_programs, update_program};
