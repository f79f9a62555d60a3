//! Remove Experience Use Case
//!
//! Removes one entry by id. An id that matches nothing (or does not parse)
//! leaves the list unchanged.

use std::sync::Arc;

use crate::domain::entity::profile::Profile;
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::{ExperienceId, UserId};
use crate::error::{ProfileError, ProfileResult};

pub struct RemoveExperienceUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> RemoveExperienceUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId, raw_experience_id: &str) -> ProfileResult<Profile> {
        let mut profile = self
            .repo
            .find_by_user(&user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        let removed = ExperienceId::parse(raw_experience_id)
            .and_then(|experience_id| profile.remove_experience(&experience_id));

        match removed {
            Some(entry) => {
                self.repo.save_experience(&profile).await?;
                tracing::info!(
                    user_id = %user_id,
                    experience_id = %entry.experience_id,
                    "Experience removed"
                );
            }
            None => {
                tracing::debug!(
                    user_id = %user_id,
                    experience_id = raw_experience_id,
                    "No experience entry matched; nothing removed"
                );
            }
        }

        Ok(profile)
    }
}
