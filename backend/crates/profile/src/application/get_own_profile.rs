//! Get Own Profile Use Case

use std::sync::Arc;

use crate::domain::entity::profile::ProfileView;
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::UserId;
use crate::error::{ProfileError, ProfileResult};

pub struct GetOwnProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> GetOwnProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> ProfileResult<ProfileView> {
        self.repo
            .find_view_by_user(user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)
    }
}
