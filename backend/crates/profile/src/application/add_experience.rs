//! Add Experience Use Case
//!
//! Prepends an entry to the caller's experience list. Unlike the upsert,
//! this never creates a profile.

use std::sync::Arc;

use crate::application::validation::Validator;
use crate::domain::entity::experience::{Experience, NewExperience};
use crate::domain::entity::profile::Profile;
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::UserId;
use crate::domain::value_object::field::Field;
use crate::error::{ProfileError, ProfileResult};

/// Add experience input, as submitted
#[derive(Debug, Clone, Default)]
pub struct AddExperienceInput {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl AddExperienceInput {
    pub fn validate(self) -> ProfileResult<NewExperience> {
        let mut v = Validator::new();
        v.require("title", self.title.as_deref(), "Title is required");
        v.require("company", self.company.as_deref(), "Company is required");
        let from = if v.require("from", self.from.as_deref(), "From Date is required") {
            v.date("from", self.from.as_deref(), "From Date is invalid")
        } else {
            None
        };
        let to = v.date("to", self.to.as_deref(), "To Date is invalid");
        v.finish()?;

        // Validation passed, so every required value is present.
        match (self.title, self.company, from) {
            (Some(title), Some(company), Some(from)) => Ok(NewExperience {
                title,
                company,
                location: Field::from_text(self.location).into_set(),
                from,
                to,
                current: self.current.unwrap_or(false),
                description: Field::from_text(self.description).into_set(),
            }),
            _ => Err(ProfileError::Internal("validated experience is incomplete".into())),
        }
    }
}

pub struct AddExperienceUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> AddExperienceUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId, input: AddExperienceInput) -> ProfileResult<Profile> {
        let data = input.validate()?;

        let mut profile = self
            .repo
            .find_by_user(&user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        let experience = Experience::new(data);
        let experience_id = experience.experience_id;
        profile.add_experience(experience);
        self.repo.save_experience(&profile).await?;

        tracing::info!(user_id = %user_id, experience_id = %experience_id, "Experience added");
        Ok(profile)
    }
}
