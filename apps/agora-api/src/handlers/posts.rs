//! Post handlers.

use actix_web::{HttpResponse, web};

use agora_core::domain::{ContentDraft, PostId};
use agora_shared::ErrorResponse;
use agora_shared::dto::{ContentRequest, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts, newest first", body = [PostResponse]),
    )
)]
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = ContentRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 422, description = "Malformed body, blank field or non-integer id", body = ErrorResponse),
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<ContentRequest>,
) -> AppResult<HttpResponse> {
    let draft = ContentDraft::try_from(body.into_inner())?;
    let post = state.posts.create(draft).await?;

    tracing::info!(post_id = post.id, "Post created");
    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// GET /api/posts/{post_id}
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 422, description = "Malformed body, blank field or non-integer id", body = ErrorResponse),
    )
)]
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// PATCH /api/posts/{post_id}
#[utoipa::path(
    patch,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = i64, Path, description = "Post id")),
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 422, description = "Malformed body, blank field or non-integer id", body = ErrorResponse),
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<ContentRequest>,
) -> AppResult<HttpResponse> {
    let draft = ContentDraft::try_from(body.into_inner())?;
    let post = state.posts.update(path.into_inner(), draft).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /api/posts/{post_id}
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = i64, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post and its comments and likes deleted"),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 422, description = "Malformed body, blank field or non-integer id", body = ErrorResponse),
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    state.posts.delete(post_id).await?;

    tracing::info!(post_id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}
