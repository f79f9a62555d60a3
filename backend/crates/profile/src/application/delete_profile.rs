//! Delete Profile Use Case
//!
//! Removes the caller's profile and then the caller's user record.

use std::sync::Arc;

use crate::domain::repository::{DeleteOutcome, ProfileRepository};
use crate::domain::value_object::UserId;
use crate::error::ProfileResult;

pub struct DeleteProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Succeeds when nothing matched, so repeating the call is harmless.
    pub async fn execute(&self, user_id: &UserId) -> ProfileResult<DeleteOutcome> {
        let outcome = self.repo.delete_with_user(user_id).await?;

        tracing::info!(
            user_id = %user_id,
            profiles_deleted = outcome.profiles_deleted,
            users_deleted = outcome.users_deleted,
            "Profile and user removed"
        );

        Ok(outcome)
    }
}
