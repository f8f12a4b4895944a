//! Like/unlike handlers.

use actix_web::{HttpResponse, web};

use agora_core::domain::{PostId, validate_username};
use agora_shared::ErrorResponse;
use agora_shared::dto::{LikeRequest, LikeResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts/{post_id}/likes
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/likes",
    tag = "likes",
    params(("post_id" = i64, Path, description = "Post id")),
    request_body = LikeRequest,
    responses(
        (status = 201, description = "Like recorded", body = LikeResponse),
        (status = 400, description = "User already liked this post", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 422, description = "Malformed body, blank field or non-integer id", body = ErrorResponse),
    )
)]
pub async fn like_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<LikeRequest>,
) -> AppResult<HttpResponse> {
    let LikeRequest { username } = body.into_inner();
    validate_username(&username)?;

    let like = state.likes.like(path.into_inner(), username).await?;

    tracing::info!(post_id = like.post_id, like_id = like.id, "Post liked");
    Ok(HttpResponse::Created().json(LikeResponse::from(like)))
}

/// DELETE /api/posts/{post_id}/likes
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}/likes",
    tag = "likes",
    params(("post_id" = i64, Path, description = "Post id")),
    request_body = LikeRequest,
    responses(
        (status = 204, description = "Like removed"),
        (status = 404, description = "Post or like not found", body = ErrorResponse),
        (status = 422, description = "Malformed body, blank field or non-integer id", body = ErrorResponse),
    )
)]
pub async fn unlike_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<LikeRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let LikeRequest { username } = body.into_inner();
    validate_username(&username)?;

    state.likes.unlike(post_id, &username).await?;

    tracing::info!(post_id, "Post unliked");
    Ok(HttpResponse::NoContent().finish())
}
