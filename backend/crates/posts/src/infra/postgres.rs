//! PostgreSQL Repository Implementations
//!
//! Likes and comments are JSONB documents on the post row; mutation is
//! read-modify-write at the application layer.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::post::{AuthorCard, Comment, Like, Post};
use crate::domain::repository::{AuthorDirectory, PostRepository};
use crate::error::PostResult;

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                author_id,
                author_name,
                author_avatar,
                text,
                likes,
                comments,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.author_id.as_uuid())
        .bind(&post.author_name)
        .bind(&post.author_avatar)
        .bind(&post.text)
        .bind(Json(&post.likes))
        .bind(Json(&post.comments))
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id, author_id, author_name, author_avatar, text,
                likes, comments, created_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    async fn list_newest_first(&self) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id, author_id, author_name, author_avatar, text,
                likes, comments, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_post()).collect())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<()> {
        sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn set_likes(&self, post_id: &PostId, likes: &[Like]) -> PostResult<()> {
        sqlx::query("UPDATE posts SET likes = $2 WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .bind(Json(likes))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn set_comments(&self, post_id: &PostId, comments: &[Comment]) -> PostResult<()> {
        sqlx::query("UPDATE posts SET comments = $2 WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .bind(Json(comments))
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl AuthorDirectory for PgPostRepository {
    async fn find_author_card(&self, user_id: &UserId) -> PostResult<Option<AuthorCard>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT name, avatar_url
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| AuthorCard {
            name: r.name,
            avatar: r.avatar_url,
        }))
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    author_id: Uuid,
    author_name: String,
    author_avatar: String,
    text: String,
    likes: Json<Vec<Like>>,
    comments: Json<Vec<Comment>>,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            author_id: UserId::from_uuid(self.author_id),
            author_name: self.author_name,
            author_avatar: self.author_avatar,
            text: self.text,
            likes: self.likes.0,
            comments: self.comments.0,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    name: String,
    avatar_url: String,
}
