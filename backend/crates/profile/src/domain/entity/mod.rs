pub mod experience;
pub mod owner;
pub mod profile;
pub mod profile_patch;
