//! Delete Post Use Case
//!
//! Author-only. The ownership check happens after the existence check,
//! so a non-owner probing a missing post still sees not-found.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Delete post use case
pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId, post_id: &PostId) -> PostResult<()> {
        let post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        if &post.author_id != user_id {
            return Err(PostError::NotAuthorized);
        }

        self.repo.delete(post_id).await?;

        tracing::info!(post_id = %post_id, "Post deleted by author");

        Ok(())
    }
}
