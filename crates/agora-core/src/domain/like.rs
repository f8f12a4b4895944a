use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PostId;

pub type LikeId = i64;

/// Like entity - unique per `(post_id, username)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: LikeId,
    pub post_id: PostId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
