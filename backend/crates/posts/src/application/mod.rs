//! Application Layer
//!
//! Use cases and application services.

pub mod comment;
pub mod create_post;
pub mod delete_post;
pub mod feed;
pub mod like;

// Re-exports
pub use comment::{AddCommentUseCase, DeleteCommentUseCase};
pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use feed::{FeedUseCase, parse_post_id};
pub use like::{LikePostUseCase, UnlikePostUseCase};
