//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::profile::{Profile, ProfileView};
use crate::domain::entity::profile_patch::ProfilePatch;
use crate::domain::value_object::UserId;
use crate::error::ProfileResult;

/// Rows removed by a cascading delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteOutcome {
    pub profiles_deleted: u64,
    pub users_deleted: u64,
}

/// Profile repository trait
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Find the profile owned by `user_id`
    async fn find_by_user(&self, user_id: &UserId) -> ProfileResult<Option<Profile>>;

    /// Same as `find_by_user`, joined with the owner's name and avatar
    async fn find_view_by_user(&self, user_id: &UserId) -> ProfileResult<Option<ProfileView>>;

    /// All profiles joined with their owners, in store order
    async fn list_views(&self) -> ProfileResult<Vec<ProfileView>>;

    /// Insert a new profile; fails if the user already has one
    async fn create(&self, profile: &Profile) -> ProfileResult<()>;

    /// Apply a sparse update and return the updated document
    async fn apply_patch(
        &self,
        user_id: &UserId,
        patch: &ProfilePatch,
    ) -> ProfileResult<Option<Profile>>;

    /// Persist the experience list of an existing profile
    async fn save_experience(&self, profile: &Profile) -> ProfileResult<()>;

    /// Delete the profile and then the user, atomically.
    /// Matching nothing is not an error.
    async fn delete_with_user(&self, user_id: &UserId) -> ProfileResult<DeleteOutcome>;
}
