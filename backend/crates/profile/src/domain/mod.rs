//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    experience::Experience, owner::Owner, profile::Profile, profile::ProfileView,
    profile_patch::ProfilePatch,
};
pub use repository::{DeleteOutcome, ProfileRepository};
