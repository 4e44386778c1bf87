//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::{AuthorCard, Comment, Like, Post};
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Persist a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// Find a post by id
    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    /// All posts, newest first
    async fn list_newest_first(&self) -> PostResult<Vec<Post>>;

    /// Remove a post
    async fn delete(&self, post_id: &PostId) -> PostResult<()>;

    /// Replace the like collection of a post
    async fn set_likes(&self, post_id: &PostId, likes: &[Like]) -> PostResult<()>;

    /// Replace the comment collection of a post
    async fn set_comments(&self, post_id: &PostId, comments: &[Comment]) -> PostResult<()>;
}

/// Author display lookup, used to snapshot display data into posts and
/// comments at creation time
#[trait_variant::make(AuthorDirectory: Send)]
pub trait LocalAuthorDirectory {
    /// Current display data of a user
    async fn find_author_card(&self, user_id: &UserId) -> PostResult<Option<AuthorCard>>;
}
