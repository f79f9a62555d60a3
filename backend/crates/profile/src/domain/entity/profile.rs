//! Profile Entity
//!
//! One document per user: career metadata, social links and experience
//! history (newest first).

use chrono::{DateTime, Utc};

use crate::domain::entity::experience::Experience;
use crate::domain::entity::owner::Owner;
use crate::domain::entity::profile_patch::ProfilePatch;
use crate::domain::value_object::social::Social;
use crate::domain::value_object::{ExperienceId, ProfileId, UserId};

/// Profile entity
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub profile_id: ProfileId,
    /// Owning user; set on creation and never changed
    pub user_id: UserId,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
    /// Newest entry at index 0
    pub experience: Vec<Experience>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile joined with its owner's display data.
///
/// `owner` is `None` when the user record no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub profile: Profile,
    pub owner: Option<Owner>,
}

impl Profile {
    /// Initial document for a user that has no profile yet
    pub fn create(user_id: UserId, patch: &ProfilePatch) -> Self {
        let now = Utc::now();
        let mut profile = Self {
            profile_id: ProfileId::new(),
            user_id,
            company: None,
            website: None,
            location: None,
            bio: None,
            status: None,
            githubusername: None,
            skills: Vec::new(),
            social: Social::default(),
            experience: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        profile.apply_patch(patch);
        profile
    }

    /// Apply a sparse update. Never touches `user_id` or `experience`.
    pub fn apply_patch(&mut self, patch: &ProfilePatch) {
        patch.company.apply_to(&mut self.company);
        patch.website.apply_to(&mut self.website);
        patch.location.apply_to(&mut self.location);
        patch.bio.apply_to(&mut self.bio);
        patch.status.apply_to(&mut self.status);
        patch.githubusername.apply_to(&mut self.githubusername);
        if let Some(skills) = patch.skills.as_set() {
            self.skills = skills.as_slice().to_vec();
        }
        patch.social.apply_to(&mut self.social);
        self.updated_at = Utc::now();
    }

    /// Insert at the front of the experience list
    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
        self.updated_at = Utc::now();
    }

    /// Remove the first entry with `experience_id`.
    ///
    /// Returns the removed entry; the list is untouched when nothing matches.
    pub fn remove_experience(&mut self, experience_id: &ExperienceId) -> Option<Experience> {
        let index = self
            .experience
            .iter()
            .position(|entry| &entry.experience_id == experience_id)?;
        self.updated_at = Utc::now();
        Some(self.experience.remove(index))
    }
}
