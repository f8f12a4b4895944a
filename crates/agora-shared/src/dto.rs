//! Data Transfer Objects - request/response types for the API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use agora_core::domain::{Comment, ContentDraft, Like, Post};
use agora_core::error::DomainError;
use agora_core::time::canonical;

/// Body of `POST /posts`, `PATCH /posts/{id}` and the comment equivalents.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "Hello, world!")]
    pub content: String,
}

impl TryFrom<ContentRequest> for ContentDraft {
    type Error = DomainError;

    fn try_from(req: ContentRequest) -> Result<Self, Self::Error> {
        ContentDraft::new(req.username, req.content)
    }
}

/// Body of `POST /posts/{id}/likes` and `DELETE /posts/{id}/likes`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikeRequest {
    #[schema(example = "bob")]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub username: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    pub likes_count: u64,
    pub comments_count: u64,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            created_at: canonical(&post.created_at),
            updated_at: canonical(&post.updated_at),
            username: post.username,
            content: post.content,
            likes_count: post.likes_count,
            comments_count: post.comments_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub username: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            created_at: canonical(&comment.created_at),
            updated_at: canonical(&comment.updated_at),
            username: comment.username,
            content: comment.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub id: i64,
    pub post_id: i64,
    pub username: String,
    pub created_at: String,
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            id: like.id,
            post_id: like.post_id,
            created_at: canonical(&like.created_at),
            username: like.username,
        }
    }
}

/// Service descriptor served at `/`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub application: String,
    pub version: String,
    pub status: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Liveness report served at `/api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "up")]
    pub database: String,
    pub version: String,
    pub timestamp: String,
}
