//! Accounts Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AccountsAppState};
use crate::presentation::middleware::{AuthGateway, require_auth};

/// Create the accounts router with PostgreSQL repository
pub fn accounts_router(repo: PgUserRepository, config: Arc<AccountsConfig>) -> Router {
    accounts_router_generic(repo, config)
}

/// Create a generic accounts router for any repository implementation
pub fn accounts_router_generic<R>(repo: R, config: Arc<AccountsConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AccountsAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };

    let gateway = AuthGateway::new(config);

    Router::new()
        .route("/", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route(
            "/getuser",
            get(handlers::get_user::<R>)
                .route_layer(middleware::from_fn_with_state(gateway, require_auth)),
        )
        .with_state(state)
}
