use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PostId = i64;

/// Post entity - a top-level piece of shared content.
///
/// `likes_count` and `comments_count` are denormalized; the store recomputes
/// them from the child tables whenever a like or comment changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes_count: u64,
    pub comments_count: u64,
}
