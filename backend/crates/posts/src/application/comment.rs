//! Comment Use Cases
//!
//! Comments carry their own author snapshot. Deletion is restricted to
//! the comment's author; post owners cannot moderate other users'
//! comments.

use std::sync::Arc;

use kernel::id::{CommentId, PostId, UserId};

use crate::application::create_post::validate_text;
use crate::domain::entity::post::Comment;
use crate::domain::repository::{AuthorDirectory, PostRepository};
use crate::error::{PostError, PostResult};

/// Add comment use case
pub struct AddCommentUseCase<R>
where
    R: PostRepository + AuthorDirectory,
{
    repo: Arc<R>,
}

impl<R> AddCommentUseCase<R>
where
    R: PostRepository + AuthorDirectory,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the updated comment collection
    pub async fn execute(
        &self,
        user_id: UserId,
        post_id: &PostId,
        text: Option<String>,
    ) -> PostResult<Vec<Comment>> {
        let text = validate_text(text)?;

        let mut post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        let author = self
            .repo
            .find_author_card(&user_id)
            .await?
            .ok_or(PostError::AuthorNotFound)?;

        post.add_comment(Comment::new(user_id, &author, text));

        self.repo.set_comments(post_id, &post.comments).await?;

        Ok(post.comments)
    }
}

/// Delete comment use case
pub struct DeleteCommentUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteCommentUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the updated comment collection
    pub async fn execute(
        &self,
        user_id: &UserId,
        post_id: &PostId,
        raw_comment_id: &str,
    ) -> PostResult<Vec<Comment>> {
        let mut post = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        // A malformed comment id cannot match any comment
        let comment_id: CommentId = raw_comment_id
            .parse()
            .map_err(|_| PostError::CommentNotFound)?;

        post.remove_comment(comment_id, user_id)?;

        self.repo.set_comments(post_id, &post.comments).await?;

        Ok(post.comments)
    }
}
