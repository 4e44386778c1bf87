//! Posts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity with embedded likes/comments, repository traits
//! - `application/` - Use cases (create, feed, like, comment, delete)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Posts carry a snapshot of their author's display data, taken at
//!   creation time and never re-synced
//! - Likes are a set over user ids (one like per user per post)
//! - Comments are an ordered list, newest first
//! - Deletion is author-only; comment deletion is comment-author-only

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::posts_router;

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgPostRepository as PostStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
