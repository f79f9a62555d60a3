//! Value Objects

pub mod field;
pub mod skills;
pub mod social;

pub use kernel::id::{ExperienceId, ProfileId, UserId};
