//! List Profiles Use Case

use std::sync::Arc;

use crate::domain::entity::profile::ProfileView;
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

pub struct ListProfilesUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> ListProfilesUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every profile with its owner; order is whatever the store returns.
    pub async fn execute(&self) -> ProfileResult<Vec<ProfileView>> {
        self.repo.list_views().await
    }
}
