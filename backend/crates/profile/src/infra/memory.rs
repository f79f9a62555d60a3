//! In-Memory Repository Implementation
//!
//! Same contract as the PostgreSQL repository, held in process memory.
//! Used by the test suites and for running the router without a database.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::owner::Owner;
use crate::domain::entity::profile::{Profile, ProfileView};
use crate::domain::entity::profile_patch::ProfilePatch;
use crate::domain::repository::{DeleteOutcome, ProfileRepository};
use crate::domain::value_object::UserId;
use crate::error::{ProfileError, ProfileResult};

#[derive(Default)]
struct State {
    users: HashMap<UserId, Owner>,
    /// Insertion order stands in for store order
    profiles: Vec<Profile>,
}

impl State {
    fn position(&self, user_id: &UserId) -> Option<usize> {
        self.profiles.iter().position(|p| &p.user_id == user_id)
    }

    fn view(&self, profile: &Profile) -> ProfileView {
        ProfileView {
            profile: profile.clone(),
            owner: self.users.get(&profile.user_id).cloned(),
        }
    }
}

/// In-memory profile store
#[derive(Clone, Default)]
pub struct InMemoryProfileStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user (users are owned by another service)
    pub async fn insert_user(&self, owner: Owner) {
        let mut state = self.state.write().await;
        state.users.insert(owner.user_id, owner);
    }

    pub async fn user_exists(&self, user_id: &UserId) -> bool {
        self.state.read().await.users.contains_key(user_id)
    }

    pub async fn profile_count(&self) -> usize {
        self.state.read().await.profiles.len()
    }
}

impl ProfileRepository for InMemoryProfileStore {
    async fn find_by_user(&self, user_id: &UserId) -> ProfileResult<Option<Profile>> {
        let state = self.state.read().await;
        Ok(state.position(user_id).map(|i| state.profiles[i].clone()))
    }

    async fn find_view_by_user(&self, user_id: &UserId) -> ProfileResult<Option<ProfileView>> {
        let state = self.state.read().await;
        Ok(state
            .position(user_id)
            .map(|i| state.view(&state.profiles[i])))
    }

    async fn list_views(&self) -> ProfileResult<Vec<ProfileView>> {
        let state = self.state.read().await;
        Ok(state.profiles.iter().map(|p| state.view(p)).collect())
    }

    async fn create(&self, profile: &Profile) -> ProfileResult<()> {
        let mut state = self.state.write().await;
        if state.position(&profile.user_id).is_some() {
            return Err(ProfileError::Internal(format!(
                "duplicate profile for user {}",
                profile.user_id
            )));
        }
        state.profiles.push(profile.clone());
        Ok(())
    }

    async fn apply_patch(
        &self,
        user_id: &UserId,
        patch: &ProfilePatch,
    ) -> ProfileResult<Option<Profile>> {
        let mut state = self.state.write().await;
        let Some(i) = state.position(user_id) else {
            return Ok(None);
        };
        let profile = &mut state.profiles[i];
        profile.apply_patch(patch);
        Ok(Some(profile.clone()))
    }

    async fn save_experience(&self, profile: &Profile) -> ProfileResult<()> {
        let mut state = self.state.write().await;
        if let Some(i) = state.position(&profile.user_id) {
            let stored = &mut state.profiles[i];
            stored.experience = profile.experience.clone();
            stored.updated_at = profile.updated_at;
        }
        Ok(())
    }

    async fn delete_with_user(&self, user_id: &UserId) -> ProfileResult<DeleteOutcome> {
        // One write guard covers both removals.
        let mut state = self.state.write().await;
        let before = state.profiles.len();
        state.profiles.retain(|p| &p.user_id != user_id);
        let profiles_deleted = (before - state.profiles.len()) as u64;
        let users_deleted = u64::from(state.users.remove(user_id).is_some());

        Ok(DeleteOutcome {
            profiles_deleted,
            users_deleted,
        })
    }
}
