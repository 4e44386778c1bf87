//! Create Post Use Case
//!
//! Snapshots the author's current display data into the post.

use std::sync::Arc;

use kernel::error::app_error::FieldError;
use kernel::id::UserId;

use crate::domain::entity::post::Post;
use crate::domain::repository::{AuthorDirectory, PostRepository};
use crate::error::{PostError, PostResult};

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository + AuthorDirectory,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository + AuthorDirectory,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId, text: Option<String>) -> PostResult<Post> {
        let text = validate_text(text)?;

        let author = self
            .repo
            .find_author_card(&user_id)
            .await?
            .ok_or(PostError::AuthorNotFound)?;

        let post = Post::new(user_id, &author, text);

        self.repo.create(&post).await?;

        tracing::info!(post_id = %post.post_id, author_id = %user_id, "Post created");

        Ok(post)
    }
}

/// Shared text validation for posts and comments
pub(crate) fn validate_text(text: Option<String>) -> PostResult<String> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(PostError::Validation(vec![FieldError::new(
            "text",
            "Text is required",
        )])),
    }
}
