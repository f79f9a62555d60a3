//! HTTP Handlers

use axum::extract::{Path, State};
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AddExperienceUseCase, DeleteProfileUseCase, GetOwnProfileUseCase, GetProfileByUserUseCase,
    ListProfilesUseCase, RemoveExperienceUseCase, UpsertProfileUseCase,
};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;
use crate::presentation::dto::{
    AddExperienceRequest, MessageResponse, ProfileResponse, UpsertProfileRequest,
};
use crate::presentation::extract::JsonBody;
use crate::presentation::middleware::AuthUser;

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfileAppState<R>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub auth: Arc<AuthConfig>,
}

// ============================================================================
// Own profile
// ============================================================================

/// GET /api/profile/me
pub async fn get_own_profile<R>(
    State(state): State<ProfileAppState<R>>,
    Extension(auth): Extension<AuthUser>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetOwnProfileUseCase::new(state.repo.clone());
    let view = use_case.execute(&auth.user_id).await?;

    Ok(Json(view.into()))
}

/// POST /api/profile
pub async fn upsert_profile<R>(
    State(state): State<ProfileAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    JsonBody(req): JsonBody<UpsertProfileRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpsertProfileUseCase::new(state.repo.clone());
    let profile = use_case.execute(auth.user_id, req.into()).await?;

    Ok(Json(profile.into()))
}

/// DELETE /api/profile
pub async fn delete_profile<R>(
    State(state): State<ProfileAppState<R>>,
    Extension(auth): Extension<AuthUser>,
) -> ProfileResult<Json<MessageResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteProfileUseCase::new(state.repo.clone());
    use_case.execute(&auth.user_id).await?;

    Ok(Json(MessageResponse {
        msg: "User removed".to_string(),
    }))
}

// ============================================================================
// Public reads
// ============================================================================

/// GET /api/profile
pub async fn list_profiles<R>(
    State(state): State<ProfileAppState<R>>,
) -> ProfileResult<Json<Vec<ProfileResponse>>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListProfilesUseCase::new(state.repo.clone());
    let views = use_case.execute().await?;

    Ok(Json(views.into_iter().map(ProfileResponse::from).collect()))
}

/// GET /api/profile/user/{user_id}
pub async fn get_profile_by_user<R>(
    State(state): State<ProfileAppState<R>>,
    Path(user_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileByUserUseCase::new(state.repo.clone());
    let view = use_case.execute(&user_id).await?;

    Ok(Json(view.into()))
}

// ============================================================================
// Experience
// ============================================================================

/// PUT /api/profile/experience
pub async fn add_experience<R>(
    State(state): State<ProfileAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    JsonBody(req): JsonBody<AddExperienceRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddExperienceUseCase::new(state.repo.clone());
    let profile = use_case.execute(auth.user_id, req.into()).await?;

    Ok(Json(profile.into()))
}

/// DELETE /api/profile/experience/{exp_id}
pub async fn remove_experience<R>(
    State(state): State<ProfileAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(exp_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = RemoveExperienceUseCase::new(state.repo.clone());
    let profile = use_case.execute(auth.user_id, &exp_id).await?;

    Ok(Json(profile.into()))
}
