//! Application state - shared across all handlers.

use std::sync::Arc;

use agora_core::ports::{CommentRepository, LikeRepository, PostRepository};
use agora_infra::{DatabasePool, SqliteCommentRepository, SqliteLikeRepository, SqlitePostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub db: DatabasePool,
}

impl AppState {
    /// Wire the SQLite repositories onto an initialized pool.
    pub fn new(db: DatabasePool) -> Self {
        let posts = Arc::new(SqlitePostRepository::new(db.main.clone()));
        let comments = Arc::new(SqliteCommentRepository::new(db.main.clone()));
        let likes = Arc::new(SqliteLikeRepository::new(db.main.clone()));

        tracing::info!("Application state initialized");

        Self {
            posts,
            comments,
            likes,
            db,
        }
    }
}
