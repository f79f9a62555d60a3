//! Upsert Profile Use Case
//!
//! Creates the caller's profile on first write, sparse-updates it afterwards.

use std::sync::Arc;

use crate::application::validation::Validator;
use crate::domain::entity::profile::Profile;
use crate::domain::entity::profile_patch::ProfilePatch;
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::UserId;
use crate::domain::value_object::field::Field;
use crate::domain::value_object::skills::Skills;
use crate::domain::value_object::social::SocialPatch;
use crate::error::{ProfileError, ProfileResult};

/// Upsert input, as submitted
#[derive(Debug, Clone, Default)]
pub struct UpsertProfileInput {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    /// Comma-delimited
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl UpsertProfileInput {
    /// Validate required fields and build the sparse patch
    pub fn into_patch(self) -> ProfileResult<ProfilePatch> {
        let mut v = Validator::new();
        v.require("status", self.status.as_deref(), "status is required");
        // A value made only of delimiters parses to nothing and counts as missing.
        let skills = self.skills.as_deref().map(Skills::parse);
        if v.require("skills", self.skills.as_deref(), "skills is required")
            && skills.as_ref().is_some_and(Skills::is_empty)
        {
            v.reject("skills", self.skills.as_deref(), "skills is required");
        }
        v.finish()?;

        Ok(ProfilePatch {
            company: Field::from_text(self.company),
            website: Field::from_text(self.website),
            location: Field::from_text(self.location),
            bio: Field::from_text(self.bio),
            status: Field::from_text(self.status),
            githubusername: Field::from_text(self.githubusername),
            skills: skills.map_or(Field::Unset, Field::Set),
            social: SocialPatch {
                youtube: Field::from_text(self.youtube),
                twitter: Field::from_text(self.twitter),
                facebook: Field::from_text(self.facebook),
                linkedin: Field::from_text(self.linkedin),
                instagram: Field::from_text(self.instagram),
            },
        })
    }
}

/// Upsert profile use case
pub struct UpsertProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> UpsertProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId, input: UpsertProfileInput) -> ProfileResult<Profile> {
        let patch = input.into_patch()?;

        // Read-then-write without a transaction; the unique index on the
        // owner turns a racing second create into a store error.
        if self.repo.find_by_user(&user_id).await?.is_some() {
            let profile = self
                .repo
                .apply_patch(&user_id, &patch)
                .await?
                .ok_or_else(|| ProfileError::Internal("profile vanished during update".into()))?;

            tracing::info!(user_id = %user_id, created = false, "Profile updated");
            return Ok(profile);
        }

        let profile = Profile::create(user_id, &patch);
        self.repo.create(&profile).await?;

        tracing::info!(user_id = %user_id, created = true, "Profile created");
        Ok(profile)
    }
}
