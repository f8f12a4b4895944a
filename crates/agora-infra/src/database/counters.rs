//! Denormalized post counters.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use agora_core::domain::PostId;

use super::entity::{comment, like, post};

/// Recompute `likes_count` and `comments_count` of a post from the live
/// child rows and store them on the post.
///
/// Counters are always rebuilt from a full count, never incremented, so a
/// stale value is corrected by the next refresh.
pub async fn refresh_counts<C: ConnectionTrait>(conn: &C, post_id: PostId) -> Result<(), DbErr> {
    let likes = like::Entity::find()
        .filter(like::Column::PostId.eq(post_id))
        .count(conn)
        .await?;
    let comments = comment::Entity::find()
        .filter(comment::Column::PostId.eq(post_id))
        .count(conn)
        .await?;

    post::Entity::update_many()
        .col_expr(post::Column::LikesCount, Expr::value(likes as i64))
        .col_expr(post::Column::CommentsCount, Expr::value(comments as i64))
        .filter(post::Column::Id.eq(post_id))
        .exec(conn)
        .await?;

    tracing::debug!(post_id, likes, comments, "Post counters refreshed");
    Ok(())
}
