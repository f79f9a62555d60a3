//! Profile Router

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::ProfileRepository;
use crate::infra::postgres::PgProfileRepository;
use crate::presentation::handlers::{self, ProfileAppState};
use crate::presentation::middleware::require_auth;

/// Create the Profile router with PostgreSQL repository
pub fn profile_router(repo: PgProfileRepository, config: AuthConfig) -> Router {
    profile_router_generic(repo, config)
}

/// Create a generic Profile router for any repository implementation
pub fn profile_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let state = ProfileAppState {
        repo: Arc::new(repo),
        auth: Arc::new(config),
    };

    let public = Router::new()
        .route("/", get(handlers::list_profiles::<R>))
        .route("/user/{user_id}", get(handlers::get_profile_by_user::<R>));

    let protected = Router::new()
        .route("/me", get(handlers::get_own_profile::<R>))
        .route(
            "/",
            post(handlers::upsert_profile::<R>).delete(handlers::delete_profile::<R>),
        )
        .route("/experience", put(handlers::add_experience::<R>))
        .route(
            "/experience/{exp_id}",
            delete(handlers::remove_experience::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_auth,
        ));

    // `/` carries a public GET alongside the protected POST and DELETE
    public.merge(protected).with_state(state)
}
