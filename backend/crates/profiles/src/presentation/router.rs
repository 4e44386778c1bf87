//! Profiles Router
//!
//! Read endpoints (directory, by-user lookup, GitHub proxy) are public;
//! everything that mutates goes through the accounts auth gateway.

use axum::{
    Router, middleware,
    routing::{delete, get, put},
};
use platform::github::GithubClient;
use std::sync::Arc;

use accounts::middleware::{AuthGateway, require_auth};

use crate::domain::repository::ProfileRepository;
use crate::infra::postgres::PgProfileRepository;
use crate::presentation::handlers::{self, ProfilesAppState};

/// Create the profiles router with PostgreSQL repository
pub fn profiles_router(
    repo: PgProfileRepository,
    github: GithubClient,
    gateway: AuthGateway,
) -> Router {
    profiles_router_generic(repo, github, gateway)
}

/// Create a generic profiles router for any repository implementation
pub fn profiles_router_generic<R>(repo: R, github: GithubClient, gateway: AuthGateway) -> Router
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let state = ProfilesAppState {
        repo: Arc::new(repo),
        github: Arc::new(github),
    };

    let public = Router::new()
        .route("/", get(handlers::list_profiles::<R>))
        .route("/user/{user_id}", get(handlers::get_profile_by_user::<R>))
        .route("/github/{username}", get(handlers::github_repos::<R>));

    let private = Router::new()
        .route("/me", get(handlers::get_my_profile::<R>))
        .route(
            "/",
            axum::routing::post(handlers::upsert_profile::<R>)
                .delete(handlers::delete_account::<R>),
        )
        .route("/experience", put(handlers::add_experience::<R>))
        .route(
            "/experience/{exp_id}",
            delete(handlers::delete_experience::<R>),
        )
        .route("/education", put(handlers::add_education::<R>))
        .route(
            "/education/{edu_id}",
            delete(handlers::delete_education::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gateway, require_auth));

    public.merge(private).with_state(state)
}
