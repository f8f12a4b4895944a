//! Error envelope returned by every failing endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{ "message": "Post not found" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Post not found")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
