//! Get Profile By User Use Case
//!
//! Public lookup by the raw path segment. A malformed id is answered exactly
//! like an id without a profile.

use std::sync::Arc;

use crate::domain::entity::profile::ProfileView;
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::UserId;
use crate::error::{ProfileError, ProfileResult};

pub struct GetProfileByUserUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> GetProfileByUserUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_user_id: &str) -> ProfileResult<ProfileView> {
        let user_id = UserId::parse(raw_user_id).ok_or(ProfileError::UserProfileNotFound)?;

        self.repo
            .find_view_by_user(&user_id)
            .await?
            .ok_or(ProfileError::UserProfileNotFound)
    }
}
