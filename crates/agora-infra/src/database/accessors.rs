//! Lookup helpers shared by the repositories.
//!
//! Generic over [`ConnectionTrait`] so they run on the pool for reads and on
//! the open transaction inside mutations.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use agora_core::domain::{CommentId, PostId};
use agora_core::error::RepoError;

use super::entity::{comment, like, post};
use super::sqlite_base::map_db_err;

/// Exact primary-key lookup of a post.
pub async fn find_post<C: ConnectionTrait>(
    conn: &C,
    id: PostId,
) -> Result<Option<post::Model>, DbErr> {
    post::Entity::find_by_id(id).one(conn).await
}

/// Comment lookup constrained to its parent post. A comment id that exists
/// under another post is reported as absent.
pub async fn find_comment<C: ConnectionTrait>(
    conn: &C,
    post_id: PostId,
    comment_id: CommentId,
) -> Result<Option<comment::Model>, DbErr> {
    comment::Entity::find_by_id(comment_id)
        .filter(comment::Column::PostId.eq(post_id))
        .one(conn)
        .await
}

pub(crate) async fn find_like<C: ConnectionTrait>(
    conn: &C,
    post_id: PostId,
    username: &str,
) -> Result<Option<like::Model>, DbErr> {
    like::Entity::find()
        .filter(like::Column::PostId.eq(post_id))
        .filter(like::Column::Username.eq(username))
        .one(conn)
        .await
}

pub(crate) async fn require_post<C: ConnectionTrait>(
    conn: &C,
    id: PostId,
) -> Result<post::Model, RepoError> {
    find_post(conn, id)
        .await
        .map_err(map_db_err)?
        .ok_or(RepoError::NotFound("Post"))
}

pub(crate) async fn require_comment<C: ConnectionTrait>(
    conn: &C,
    post_id: PostId,
    comment_id: CommentId,
) -> Result<comment::Model, RepoError> {
    find_comment(conn, post_id, comment_id)
        .await
        .map_err(map_db_err)?
        .ok_or(RepoError::NotFound("Comment"))
}
