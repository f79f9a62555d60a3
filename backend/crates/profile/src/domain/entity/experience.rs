//! Experience Entity
//!
//! One past role embedded in a profile's experience list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::ExperienceId;

/// Experience entry
///
/// Stored inside the profile document; the serialized form is both the
/// stored form and the wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// Generated on insert, stable for the entry's lifetime
    #[serde(rename = "_id")]
    pub experience_id: ExperienceId,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Validated data for a new entry (no id yet)
#[derive(Debug, Clone, PartialEq)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
}

impl Experience {
    /// Create an entry with a fresh identifier
    pub fn new(data: NewExperience) -> Self {
        Self {
            experience_id: ExperienceId::new(),
            title: data.title,
            company: data.company,
            location: data.location,
            from: data.from,
            to: data.to,
            current: data.current,
            description: data.description,
        }
    }
}
