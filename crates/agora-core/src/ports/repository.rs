use async_trait::async_trait;

use crate::domain::{Comment, CommentId, ContentDraft, Like, Post, PostId};
use crate::error::RepoError;

/// Post repository.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first (ties broken by descending id).
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Insert a post with zero counters.
    async fn create(&self, draft: ContentDraft) -> Result<Post, RepoError>;

    /// Overwrite author and content and bump `updated_at`.
    async fn update(&self, id: PostId, draft: ContentDraft) -> Result<Post, RepoError>;

    /// Delete a post together with its comments and likes.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;
}

/// Comment repository. Every method fails with `NotFound("Post")` when the
/// parent post is absent, before anything else is read or written.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments of a post, oldest first (ties broken by ascending id).
    async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Comment>, RepoError>;

    /// Find a comment that belongs to `post_id`.
    async fn find(&self, post_id: PostId, comment_id: CommentId)
    -> Result<Option<Comment>, RepoError>;

    async fn create(&self, post_id: PostId, draft: ContentDraft) -> Result<Comment, RepoError>;

    async fn update(
        &self,
        post_id: PostId,
        comment_id: CommentId,
        draft: ContentDraft,
    ) -> Result<Comment, RepoError>;

    async fn delete(&self, post_id: PostId, comment_id: CommentId) -> Result<(), RepoError>;
}

/// Like repository.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Find the like `username` left on a post, if any.
    async fn find(&self, post_id: PostId, username: &str) -> Result<Option<Like>, RepoError>;

    /// Record a like. A second like by the same user is a `Constraint` error.
    async fn like(&self, post_id: PostId, username: String) -> Result<Like, RepoError>;

    /// Remove a like. Fails with `NotFound("Like")` if the user never liked the post.
    async fn unlike(&self, post_id: PostId, username: &str) -> Result<(), RepoError>;
}
