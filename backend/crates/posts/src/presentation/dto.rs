//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::post::{Comment, Like, Post};

// ============================================================================
// Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub text: Option<String>,
}

/// Add comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub text: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Post response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub user: String,
    pub name: String,
    pub avatar: String,
    pub text: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub date_ms: i64,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.post_id.to_string(),
            user: post.author_id.to_string(),
            name: post.author_name.clone(),
            avatar: post.author_avatar.clone(),
            text: post.text.clone(),
            likes: post.likes.clone(),
            comments: post.comments.clone(),
            date_ms: post.created_at.timestamp_millis(),
        }
    }
}

/// Simple acknowledgement response
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::post::AuthorCard;
    use kernel::id::UserId;

    #[test]
    fn test_post_response_serialization() {
        let author = AuthorCard {
            name: "Ada".to_string(),
            avatar: "https://www.gravatar.com/avatar/0".to_string(),
        };
        let post = Post::new(UserId::new(), &author, "hello".to_string());

        let json = serde_json::to_value(PostResponse::from(&post)).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["text"], "hello");
        assert!(json["likes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_create_post_request_missing_text() {
        let request: CreatePostRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_none());
    }
}
