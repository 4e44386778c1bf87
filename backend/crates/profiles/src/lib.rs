//! Profiles Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Profile entity, embedded sub-collections, repository trait
//! - `application/` - Use cases (upsert, sub-entry mutation, cascade delete)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - One profile per user, created or fully replaced via upsert
//! - Ordered experience/education sub-collections (newest first)
//! - Website and social links coerced to canonical absolute HTTPS form
//! - Account deletion cascading over posts, profile and user
//! - GitHub repository listing pass-through

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{ProfileError, ProfileResult};
pub use infra::postgres::PgProfileRepository;
pub use presentation::router::profiles_router;

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgProfileRepository as ProfileStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
