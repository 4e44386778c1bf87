//! Auth Gateway Middleware
//!
//! Extracts the identity token from the `x-auth-token` header, verifies
//! it, and attaches the resolved user id to the request extensions. A
//! pure filter: never touches storage, never retries.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::application::token::TokenService;
use crate::error::AccountError;

/// Header carrying the identity token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Auth gateway state, shared by every protected router
#[derive(Clone)]
pub struct AuthGateway {
    config: Arc<AccountsConfig>,
}

impl AuthGateway {
    pub fn new(config: Arc<AccountsConfig>) -> Self {
        Self { config }
    }
}

/// Identity resolved by the gateway, stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid identity token
pub async fn require_auth(
    State(gateway): State<AuthGateway>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = req
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    let Some(token) = token else {
        return Err(AccountError::MissingToken.into_response());
    };

    let service = TokenService::new(gateway.config.clone());

    match service.verify(token) {
        Ok(user_id) => {
            req.extensions_mut().insert(AuthUser { user_id });
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected identity token");
            Err(AccountError::TokenRejected.into_response())
        }
    }
}
