//! Comment handlers. Every route is nested under an existing post.

use actix_web::{HttpResponse, web};

use agora_core::domain::{CommentId, ContentDraft, PostId};
use agora_shared::ErrorResponse;
use agora_shared::dto::{CommentResponse, ContentRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts/{post_id}/comments
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = "comments",
    params(("post_id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comments on the post, oldest first", body = [CommentResponse]),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 422, description = "Malformed body, blank field or non-integer id", body = ErrorResponse),
    )
)]
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let comments: Vec<CommentResponse> = state
        .comments
        .list_for_post(path.into_inner())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(comments))
}

/// POST /api/posts/{post_id}/comments
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = "comments",
    params(("post_id" = i64, Path, description = "Post id")),
    request_body = ContentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 422, description = "Malformed body, blank field or non-integer id", body = ErrorResponse),
    )
)]
pub async fn create_comment(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<ContentRequest>,
) -> AppResult<HttpResponse> {
    let draft = ContentDraft::try_from(body.into_inner())?;
    let comment = state.comments.create(path.into_inner(), draft).await?;

    tracing::info!(post_id = comment.post_id, comment_id = comment.id, "Comment created");
    Ok(HttpResponse::Created().json(CommentResponse::from(comment)))
}

/// GET /api/posts/{post_id}/comments/{comment_id}
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments/{comment_id}",
    tag = "comments",
    params(("post_id" = i64, Path, description = "Post id"), ("comment_id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, description = "The comment", body = CommentResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse),
        (status = 422, description = "Malformed body, blank field or non-integer id", body = ErrorResponse),
    )
)]
pub async fn get_comment(
    state: web::Data<AppState>,
    path: web::Path<(PostId, CommentId)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let comment = state
        .comments
        .find(post_id, comment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

    Ok(HttpResponse::Ok().json(CommentResponse::from(comment)))
}

/// PATCH /api/posts/{post_id}/comments/{comment_id}
#[utoipa::path(
    patch,
    path = "/api/posts/{post_id}/comments/{comment_id}",
    tag = "comments",
    params(("post_id" = i64, Path, description = "Post id"), ("comment_id" = i64, Path, description = "Comment id")),
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Comment updated", body = CommentResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse),
        (status = 422, description = "Malformed body, blank field or non-integer id", body = ErrorResponse),
    )
)]
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<(PostId, CommentId)>,
    body: web::Json<ContentRequest>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let draft = ContentDraft::try_from(body.into_inner())?;
    let comment = state.comments.update(post_id, comment_id, draft).await?;

    Ok(HttpResponse::Ok().json(CommentResponse::from(comment)))
}

/// DELETE /api/posts/{post_id}/comments/{comment_id}
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}/comments/{comment_id}",
    tag = "comments",
    params(("post_id" = i64, Path, description = "Post id"), ("comment_id" = i64, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "Post or comment not found", body = ErrorResponse),
        (status = 422, description = "Malformed body, blank field or non-integer id", body = ErrorResponse),
    )
)]
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<(PostId, CommentId)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    state.comments.delete(post_id, comment_id).await?;

    tracing::info!(post_id, comment_id, "Comment deleted");
    Ok(HttpResponse::NoContent().finish())
}
