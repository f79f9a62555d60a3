//! Profile Patch
//!
//! Sparse write built from validated input. Only [`Field::Set`] values reach
//! the store; everything else keeps its stored value.

use crate::domain::value_object::field::Field;
use crate::domain::value_object::skills::Skills;
use crate::domain::value_object::social::SocialPatch;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfilePatch {
    pub company: Field<String>,
    pub website: Field<String>,
    pub location: Field<String>,
    pub bio: Field<String>,
    pub status: Field<String>,
    pub githubusername: Field<String>,
    pub skills: Field<Skills>,
    pub social: SocialPatch,
}
