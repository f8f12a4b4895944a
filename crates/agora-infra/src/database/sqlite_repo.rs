//! SQLite repository implementations.
//!
//! Mutations that touch comments or likes run check, write and counter
//! refresh inside one transaction.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use agora_core::domain::{Comment, CommentId, ContentDraft, Like, Post, PostId};
use agora_core::error::RepoError;
use agora_core::ports::{CommentRepository, LikeRepository, PostRepository};
use agora_core::time;

use super::accessors::{find_comment, find_like, find_post, require_comment, require_post};
use super::counters::refresh_counts;
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::like::{self, Entity as LikeEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::sqlite_base::{SqliteBaseRepository, map_db_err};

/// SQLite post repository.
pub type SqlitePostRepository = SqliteBaseRepository<PostEntity>;

/// SQLite comment repository.
pub type SqliteCommentRepository = SqliteBaseRepository<CommentEntity>;

/// SQLite like repository.
pub type SqliteLikeRepository = SqliteBaseRepository<LikeEntity>;

const ALREADY_LIKED: &str = "User already liked this post";

fn timestamp_now() -> Option<String> {
    Some(time::canonical(&time::now()))
}

/// Sort key for `created_at` as an instant. Stored rows mix the canonical
/// RFC 3339 form with SQLite's `YYYY-MM-DD HH:MM:SS`, which do not sort
/// together as text.
fn created_instant() -> SimpleExpr {
    Expr::cust("julianday(created_at)")
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(created_instant())
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let row = find_post(&self.db, id).await.map_err(map_db_err)?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, draft: ContentDraft) -> Result<Post, RepoError> {
        let now = timestamp_now();
        let model = post::ActiveModel {
            username: Set(draft.username),
            content: Set(draft.content),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            likes_count: Set(0),
            comments_count: Set(0),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Post created");
        Ok(model.into())
    }

    async fn update(&self, id: PostId, draft: ContentDraft) -> Result<Post, RepoError> {
        let txn = self.begin().await?;
        let mut active: post::ActiveModel = require_post(&txn, id).await?.into();

        active.username = Set(draft.username);
        active.content = Set(draft.content);
        active.updated_at = Set(timestamp_now());

        let model = active.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id = id, "Post updated");
        Ok(model.into())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        // Comments and likes go with it through ON DELETE CASCADE.
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound("Post"));
        }

        tracing::debug!(post_id = id, "Post deleted");
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Comment>, RepoError> {
        require_post(&self.db, post_id).await?;

        let rows = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(created_instant())
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<Option<Comment>, RepoError> {
        require_post(&self.db, post_id).await?;

        let row = find_comment(&self.db, post_id, comment_id)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, post_id: PostId, draft: ContentDraft) -> Result<Comment, RepoError> {
        let txn = self.begin().await?;
        require_post(&txn, post_id).await?;

        let now = timestamp_now();
        let model = comment::ActiveModel {
            post_id: Set(post_id),
            username: Set(draft.username),
            content: Set(draft.content),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        refresh_counts(&txn, post_id).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id, comment_id = model.id, "Comment created");
        Ok(model.into())
    }

    async fn update(
        &self,
        post_id: PostId,
        comment_id: CommentId,
        draft: ContentDraft,
    ) -> Result<Comment, RepoError> {
        let txn = self.begin().await?;
        require_post(&txn, post_id).await?;
        let mut active: comment::ActiveModel =
            require_comment(&txn, post_id, comment_id).await?.into();

        active.username = Set(draft.username);
        active.content = Set(draft.content);
        active.updated_at = Set(timestamp_now());

        let model = active.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id, comment_id, "Comment updated");
        Ok(model.into())
    }

    async fn delete(&self, post_id: PostId, comment_id: CommentId) -> Result<(), RepoError> {
        let txn = self.begin().await?;
        require_post(&txn, post_id).await?;
        require_comment(&txn, post_id, comment_id).await?;

        CommentEntity::delete_by_id(comment_id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        refresh_counts(&txn, post_id).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id, comment_id, "Comment deleted");
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for SqliteLikeRepository {
    async fn find(&self, post_id: PostId, username: &str) -> Result<Option<Like>, RepoError> {
        let row = find_like(&self.db, post_id, username)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Into::into))
    }

    async fn like(&self, post_id: PostId, username: String) -> Result<Like, RepoError> {
        let txn = self.begin().await?;
        require_post(&txn, post_id).await?;

        if find_like(&txn, post_id, &username)
            .await
            .map_err(map_db_err)?
            .is_some()
        {
            return Err(RepoError::Constraint(ALREADY_LIKED.to_string()));
        }

        let model = like::ActiveModel {
            post_id: Set(post_id),
            username: Set(username),
            created_at: Set(timestamp_now()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| match map_db_err(e) {
            // Lost a race with a concurrent like by the same user.
            RepoError::Constraint(_) => RepoError::Constraint(ALREADY_LIKED.to_string()),
            other => other,
        })?;

        refresh_counts(&txn, post_id).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id, like_id = model.id, "Post liked");
        Ok(model.into())
    }

    async fn unlike(&self, post_id: PostId, username: &str) -> Result<(), RepoError> {
        let txn = self.begin().await?;
        require_post(&txn, post_id).await?;

        let result = LikeEntity::delete_many()
            .filter(like::Column::PostId.eq(post_id))
            .filter(like::Column::Username.eq(username))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound("Like"));
        }

        refresh_counts(&txn, post_id).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id, "Post unliked");
        Ok(())
    }
}
