//! Shared Module
//!
//! Types shared between the HTTP backend and the client session. Everything
//! here is plain data plus validation, so it compiles with or without the
//! `ssr` feature.

/// Entities and request/response payloads
pub mod models;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use models::{
    AuthResponse, ErrorBody, JoinResponse, LoginRequest, MessageResponse, NewProgram,
    NewResource, Program, ProgramChanges, ProgramMode, ProgramStatus, PublicUser,
    RegisterRequest, Resource, ResourceChanges, Role, SeedRequest, SeedResponse,
    DEFAULT_PROGRAM_CAPACITY,
};
