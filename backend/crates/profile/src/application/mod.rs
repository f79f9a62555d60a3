//! Application Layer
//!
//! Use cases and application services.

pub mod add_experience;
pub mod config;
pub mod delete_profile;
pub mod get_own_profile;
pub mod get_profile_by_user;
pub mod list_profiles;
pub mod remove_experience;
pub mod token;
pub mod upsert_profile;
pub mod validation;

// Re-exports
pub use add_experience::{AddExperienceInput, AddExperienceUseCase};
pub use config::AuthConfig;
pub use delete_profile::DeleteProfileUseCase;
pub use get_own_profile::GetOwnProfileUseCase;
pub use get_profile_by_user::GetProfileByUserUseCase;
pub use list_profiles::ListProfilesUseCase;
pub use remove_experience::RemoveExperienceUseCase;
pub use token::{issue_token, verify_token};
pub use upsert_profile::{UpsertProfileInput, UpsertProfileUseCase};
pub use validation::{FieldError, Validator};
