//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the document wire format existing clients expect
//! (`_id`, `user`, `date`, lower-case `githubusername`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{AddExperienceInput, UpsertProfileInput};
use crate::domain::entity::experience::Experience;
use crate::domain::entity::owner::Owner;
use crate::domain::entity::profile::{Profile, ProfileView};
use crate::domain::value_object::social::Social;

// ============================================================================
// Requests
// ============================================================================

/// Create/update profile request; `skills` is comma-delimited
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl From<UpsertProfileRequest> for UpsertProfileInput {
    fn from(req: UpsertProfileRequest) -> Self {
        Self {
            company: req.company,
            website: req.website,
            location: req.location,
            bio: req.bio,
            status: req.status,
            githubusername: req.githubusername,
            skills: req.skills,
            youtube: req.youtube,
            twitter: req.twitter,
            facebook: req.facebook,
            linkedin: req.linkedin,
            instagram: req.instagram,
        }
    }
}

/// Add experience request; dates are `YYYY-MM-DD` or RFC 3339
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl From<AddExperienceRequest> for AddExperienceInput {
    fn from(req: AddExperienceRequest) -> Self {
        Self {
            title: req.title,
            company: req.company,
            location: req.location,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Profile document
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: UserRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub date: DateTime<Utc>,
}

/// Owner reference: bare id on write responses, joined object on reads
/// (`null` when the user record is gone)
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    Populated(Option<OwnerResponse>),
}

#[derive(Debug, Clone, Serialize)]
pub struct OwnerResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<Owner> for OwnerResponse {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.user_id.to_string(),
            name: owner.name,
            avatar: owner.avatar,
        }
    }
}

impl ProfileResponse {
    fn build(profile: Profile, user: UserRef) -> Self {
        Self {
            id: profile.profile_id.to_string(),
            user,
            company: profile.company,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            status: profile.status,
            githubusername: profile.githubusername,
            skills: profile.skills,
            social: profile.social,
            experience: profile.experience,
            date: profile.created_at,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        let user = UserRef::Id(profile.user_id.to_string());
        Self::build(profile, user)
    }
}

impl From<ProfileView> for ProfileResponse {
    fn from(view: ProfileView) -> Self {
        let user = UserRef::Populated(view.owner.map(OwnerResponse::from));
        Self::build(view.profile, user)
    }
}

/// `{ "msg": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}
