//! Like / Unlike Use Cases
//!
//! Read-modify-write over the embedded like collection. Two concurrent
//! cycles on the same post can race and one write can win over the
//! other; see the crate tests for the interleaving.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Like;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Like use case
pub struct LikePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> LikePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the updated like collection
    pub async fn execute(&self, user_id: UserId, post_id: &PostId) -> PostResult<Vec<Like>> {
        let mut post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        post.like(user_id)?;

        self.repo.set_likes(post_id, &post.likes).await?;

        Ok(post.likes)
    }
}

/// Unlike use case
pub struct UnlikePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> UnlikePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the updated like collection
    pub async fn execute(&self, user_id: &UserId, post_id: &PostId) -> PostResult<Vec<Like>> {
        let mut post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        post.unlike(user_id)?;

        self.repo.set_likes(post_id, &post.likes).await?;

        Ok(post.likes)
    }
}
