//! Posts Router
//!
//! The whole surface requires authentication.

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use accounts::middleware::{AuthGateway, require_auth};

use crate::domain::repository::{AuthorDirectory, PostRepository};
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the posts router with PostgreSQL repository
pub fn posts_router(repo: PgPostRepository, gateway: AuthGateway) -> Router {
    posts_router_generic(repo, gateway)
}

/// Create a generic posts router for any repository implementation
pub fn posts_router_generic<R>(repo: R, gateway: AuthGateway) -> Router
where
    R: PostRepository + AuthorDirectory + Clone + Send + Sync + 'static,
{
    let state = PostsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            post(handlers::create_post::<R>).get(handlers::list_posts::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route("/like/{id}", put(handlers::like_post::<R>))
        .route("/unlike/{id}", put(handlers::unlike_post::<R>))
        .route("/comment/{id}", post(handlers::add_comment::<R>))
        .route(
            "/comment/{id}/{comment_id}",
            delete(handlers::delete_comment::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gateway, require_auth))
        .with_state(state)
}
