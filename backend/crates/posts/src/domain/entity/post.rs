//! Post Entity
//!
//! A post owns two embedded collections persisted as JSONB on the post
//! row: likes (a set over user ids) and comments (an ordered list).
//! Both are newest-first; mutation is read-modify-write at the
//! application layer.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::error::{PostError, PostResult};

/// Display snapshot of a user, copied into posts and comments at
/// creation time. Later changes to the user do not propagate here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCard {
    pub name: String,
    pub avatar: String,
}

/// A single like; the set invariant is over `user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub user: UserId,
}

/// A comment with its own identity and author snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub user: UserId,
    pub name: String,
    pub avatar: String,
    pub text: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(user_id: UserId, author: &AuthorCard, text: String) -> Self {
        Self {
            id: CommentId::new(),
            user: user_id,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            text,
            date: Utc::now(),
        }
    }
}

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    /// Owning user; immutable for the lifetime of the post
    pub author_id: UserId,
    /// Author display snapshot, captured at creation
    pub author_name: String,
    pub author_avatar: String,
    pub text: String,
    /// Newest first
    pub likes: Vec<Like>,
    /// Newest first
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(author_id: UserId, author: &AuthorCard, text: String) -> Self {
        Self {
            post_id: PostId::new(),
            author_id,
            author_name: author.name.clone(),
            author_avatar: author.avatar.clone(),
            text,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether the given user already likes this post (linear scan; the
    /// like collection is a set over user ids)
    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.iter().any(|like| &like.user == user_id)
    }

    /// Record a like; a second like by the same user is rejected
    pub fn like(&mut self, user_id: UserId) -> PostResult<()> {
        if self.is_liked_by(&user_id) {
            return Err(PostError::AlreadyLiked);
        }
        self.likes.insert(0, Like { user: user_id });
        Ok(())
    }

    /// Remove a like; rejected when the user does not like the post
    pub fn unlike(&mut self, user_id: &UserId) -> PostResult<()> {
        if !self.is_liked_by(user_id) {
            return Err(PostError::NotLiked);
        }
        self.likes.retain(|like| &like.user != user_id);
        Ok(())
    }

    /// Prepend a comment (newest first ordering)
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Remove a comment, enforcing comment-author-only deletion
    pub fn remove_comment(&mut self, comment_id: CommentId, caller: &UserId) -> PostResult<()> {
        let comment = self
            .comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .ok_or(PostError::CommentNotFound)?;

        if &comment.user != caller {
            return Err(PostError::NotAuthorized);
        }

        self.comments.retain(|comment| comment.id != comment_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> AuthorCard {
        AuthorCard {
            name: "Ada".to_string(),
            avatar: "https://www.gravatar.com/avatar/0".to_string(),
        }
    }

    #[test]
    fn test_new_post_snapshots_author() {
        let post = Post::new(UserId::new(), &author(), "hello".to_string());
        assert_eq!(post.author_name, "Ada");
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_like_set_semantics() {
        let mut post = Post::new(UserId::new(), &author(), "hello".to_string());
        let fan = UserId::new();

        post.like(fan).unwrap();
        assert!(matches!(post.like(fan), Err(PostError::AlreadyLiked)));
        assert_eq!(post.likes.len(), 1);
    }

    #[test]
    fn test_likes_prepended() {
        let mut post = Post::new(UserId::new(), &author(), "hello".to_string());
        let first = UserId::new();
        let second = UserId::new();

        post.like(first).unwrap();
        post.like(second).unwrap();

        assert_eq!(post.likes[0].user, second);
        assert_eq!(post.likes[1].user, first);
    }

    #[test]
    fn test_unlike_restores_prior_state() {
        let mut post = Post::new(UserId::new(), &author(), "hello".to_string());
        let fan = UserId::new();

        post.like(fan).unwrap();
        post.unlike(&fan).unwrap();
        assert!(post.likes.is_empty());

        assert!(matches!(post.unlike(&fan), Err(PostError::NotLiked)));
    }

    #[test]
    fn test_comments_prepended() {
        let mut post = Post::new(UserId::new(), &author(), "hello".to_string());
        let commenter = UserId::new();

        post.add_comment(Comment::new(commenter, &author(), "first".to_string()));
        post.add_comment(Comment::new(commenter, &author(), "second".to_string()));

        assert_eq!(post.comments[0].text, "second");
        assert_eq!(post.comments[1].text, "first");
    }

    #[test]
    fn test_remove_comment_author_only() {
        let post_author = UserId::new();
        let commenter = UserId::new();
        let mut post = Post::new(post_author, &author(), "hello".to_string());

        let comment = Comment::new(commenter, &author(), "nice".to_string());
        let comment_id = comment.id;
        post.add_comment(comment);

        // The post author cannot moderate someone else's comment
        assert!(matches!(
            post.remove_comment(comment_id, &post_author),
            Err(PostError::NotAuthorized)
        ));

        post.remove_comment(comment_id, &commenter).unwrap();
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_remove_unknown_comment() {
        let mut post = Post::new(UserId::new(), &author(), "hello".to_string());
        assert!(matches!(
            post.remove_comment(CommentId::new(), &UserId::new()),
            Err(PostError::CommentNotFound)
        ));
    }
}
