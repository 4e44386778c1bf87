//! HTTP Handlers
//!
//! Every post route requires an authenticated caller; the router layers
//! the accounts auth gateway over the whole surface.

use axum::Json;
use axum::extract::{Extension, Path, State};
use std::sync::Arc;

use accounts::middleware::AuthUser;

use crate::application::{
    AddCommentUseCase, CreatePostUseCase, DeleteCommentUseCase, DeletePostUseCase, FeedUseCase,
    LikePostUseCase, UnlikePostUseCase, parse_post_id,
};
use crate::domain::entity::post::{Comment, Like};
use crate::domain::repository::{AuthorDirectory, PostRepository};
use crate::error::PostResult;
use crate::presentation::dto::{AckResponse, CommentRequest, CreatePostRequest, PostResponse};

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostsAppState<R>
where
    R: PostRepository + AuthorDirectory + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Create / read
// ============================================================================

/// POST /api/posts
pub async fn create_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<CreatePostRequest>,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository + AuthorDirectory + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let post = use_case.execute(auth.user_id, req.text).await?;

    Ok(Json(PostResponse::from(&post)))
}

/// GET /api/posts
pub async fn list_posts<R>(
    State(state): State<PostsAppState<R>>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + AuthorDirectory + Clone + Send + Sync + 'static,
{
    let use_case = FeedUseCase::new(state.repo.clone());

    let posts = use_case.list().await?;

    Ok(Json(posts.iter().map(PostResponse::from).collect()))
}

/// GET /api/posts/{id}
pub async fn get_post<R>(
    State(state): State<PostsAppState<R>>,
    Path(id): Path<String>,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository + AuthorDirectory + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case = FeedUseCase::new(state.repo.clone());

    let post = use_case.get(&post_id).await?;

    Ok(Json(PostResponse::from(&post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> PostResult<Json<AckResponse>>
where
    R: PostRepository + AuthorDirectory + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case = DeletePostUseCase::new(state.repo.clone());

    use_case.execute(&auth.user_id, &post_id).await?;

    Ok(Json(AckResponse {
        msg: "Post removed".to_string(),
    }))
}

// ============================================================================
// Likes
// ============================================================================

/// PUT /api/posts/like/{id}
pub async fn like_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> PostResult<Json<Vec<Like>>>
where
    R: PostRepository + AuthorDirectory + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case = LikePostUseCase::new(state.repo.clone());

    let likes = use_case.execute(auth.user_id, &post_id).await?;

    Ok(Json(likes))
}

/// PUT /api/posts/unlike/{id}
pub async fn unlike_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> PostResult<Json<Vec<Like>>>
where
    R: PostRepository + AuthorDirectory + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case = UnlikePostUseCase::new(state.repo.clone());

    let likes = use_case.execute(&auth.user_id, &post_id).await?;

    Ok(Json(likes))
}

// ============================================================================
// Comments
// ============================================================================

/// POST /api/posts/comment/{id}
pub async fn add_comment<R>(
    State(state): State<PostsAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(req): Json<CommentRequest>,
) -> PostResult<Json<Vec<Comment>>>
where
    R: PostRepository + AuthorDirectory + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case = AddCommentUseCase::new(state.repo.clone());

    let comments = use_case.execute(auth.user_id, &post_id, req.text).await?;

    Ok(Json(comments))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
pub async fn delete_comment<R>(
    State(state): State<PostsAppState<R>>,
    Extension(auth): Extension<AuthUser>,
    Path((id, comment_id)): Path<(String, String)>,
) -> PostResult<Json<Vec<Comment>>>
where
    R: PostRepository + AuthorDirectory + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case = DeleteCommentUseCase::new(state.repo.clone());

    let comments = use_case
        .execute(&auth.user_id, &post_id, &comment_id)
        .await?;

    Ok(Json(comments))
}
