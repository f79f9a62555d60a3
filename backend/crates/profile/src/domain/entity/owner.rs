//! Owner
//!
//! The slice of the owning user that is joined onto profile reads.
//! Users are managed elsewhere; this crate only reads them and deletes
//! them as part of the cascading profile delete.

use crate::domain::value_object::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub user_id: UserId,
    pub name: String,
    pub avatar: Option<String>,
}
