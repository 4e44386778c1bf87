//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AccountsAppState;
pub use middleware::{AUTH_TOKEN_HEADER, AuthGateway, AuthUser, require_auth};
pub use router::{accounts_router, accounts_router_generic};
