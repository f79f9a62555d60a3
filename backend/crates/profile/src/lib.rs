//! Profile Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, validation, bearer tokens
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, auth middleware
//!
//! ## Features
//! - One profile per user, created or updated through a single endpoint
//! - Public listing and lookup by user id, joined with the owner's name and avatar
//! - Work-experience history, newest entry first
//! - Deleting a profile also deletes the owning user account

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::issue_token;
pub use error::{ProfileError, ProfileResult};
pub use infra::connection::{ConnectError, Database, DatabaseConfig};
pub use infra::memory::InMemoryProfileStore;
pub use infra::postgres::PgProfileRepository;
pub use presentation::router::{profile_router, profile_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
