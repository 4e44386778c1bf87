//! Feed Use Cases
//!
//! Listing and single-post reads.

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Feed use case
pub struct FeedUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> FeedUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All posts, newest first
    pub async fn list(&self) -> PostResult<Vec<Post>> {
        self.repo.list_newest_first().await
    }

    /// One post by id
    pub async fn get(&self, post_id: &PostId) -> PostResult<Post> {
        self.repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::PostNotFound)
    }
}

/// Parse a path segment as a post id; malformed values are a client error
pub fn parse_post_id(raw: &str) -> PostResult<PostId> {
    raw.parse().map_err(|_| PostError::InvalidId)
}
