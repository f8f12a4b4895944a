use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use agora_core::domain::{ContentDraft, Post, PostId};
use agora_core::error::RepoError;
use agora_core::ports::PostRepository;
use agora_infra::{DatabaseConfig, DatabasePool};
use agora_shared::ErrorResponse;
use agora_shared::dto::{CommentResponse, LikeResponse, PostResponse};

use super::configure_routes;
use crate::middleware::cors::cors_policy;
use crate::state::AppState;

async fn test_state() -> AppState {
    let db = DatabasePool::init(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    })
    .await
    .unwrap();
    AppState::new(db)
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $req:expr) => {
        test::call_service(&$app, $req.to_request()).await
    };
}

macro_rules! create_post {
    ($app:expr, $username:expr, $content:expr) => {{
        let resp = send!(
            $app,
            TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({ "username": $username, "content": $content }))
        );
        assert_eq!(resp.status(), StatusCode::CREATED);
        test::read_body_json::<PostResponse, _>(resp).await
    }};
}

macro_rules! fetch_post {
    ($app:expr, $id:expr) => {{
        let resp = send!($app, TestRequest::get().uri(&format!("/api/posts/{}", $id)));
        assert_eq!(resp.status(), StatusCode::OK);
        test::read_body_json::<PostResponse, _>(resp).await
    }};
}

macro_rules! error_message {
    ($resp:expr) => {
        test::read_body_json::<ErrorResponse, _>($resp).await.message
    };
}

#[actix_web::test]
async fn test_create_then_get_post() {
    let app = app!(test_state().await);

    let created = create_post!(app, "alice", "hi");
    assert_eq!(created.username, "alice");
    assert_eq!(created.content, "hi");
    assert_eq!((created.likes_count, created.comments_count), (0, 0));
    assert!(created.created_at.ends_with('Z'));

    let fetched = fetch_post!(app, created.id);
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_structural_validation_is_rejected() {
    let app = app!(test_state().await);

    let resp = send!(
        app,
        TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "username": "alice" }))
    );
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = send!(
        app,
        TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "username": 5, "content": "x" }))
    );
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = send!(
        app,
        TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "username": " ", "content": "x" }))
    );
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_message!(resp), "Username is required");

    let resp = send!(app, TestRequest::get().uri("/api/posts/abc"));
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = send!(app, TestRequest::get().uri("/api/posts"));
    let posts: Vec<Value> = test::read_body_json(resp).await;
    assert!(posts.is_empty());
}

#[actix_web::test]
async fn test_missing_post_is_not_found() {
    let app = app!(test_state().await);

    let resp = send!(app, TestRequest::get().uri("/api/posts/999"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message!(resp), "Post not found");

    let resp = send!(
        app,
        TestRequest::patch()
            .uri("/api/posts/999")
            .set_json(json!({ "username": "a", "content": "b" }))
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send!(app, TestRequest::delete().uri("/api/posts/999"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send!(app, TestRequest::get().uri("/api/posts/999/comments"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message!(resp), "Post not found");

    let resp = send!(
        app,
        TestRequest::post()
            .uri("/api/posts/999/likes")
            .set_json(json!({ "username": "bob" }))
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_post() {
    let app = app!(test_state().await);
    let created = create_post!(app, "alice", "first");

    let resp = send!(
        app,
        TestRequest::patch()
            .uri(&format!("/api/posts/{}", created.id))
            .set_json(json!({ "username": "alice", "content": "edited" }))
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: PostResponse = test::read_body_json(resp).await;

    assert_eq!(updated.content, "edited");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[actix_web::test]
async fn test_list_posts_newest_first() {
    let app = app!(test_state().await);
    let first = create_post!(app, "alice", "first");
    let second = create_post!(app, "bob", "second");

    let resp = send!(app, TestRequest::get().uri("/api/posts"));
    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<PostResponse> = test::read_body_json(resp).await;

    let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[actix_web::test]
async fn test_comment_lifecycle_keeps_count() {
    let app = app!(test_state().await);
    let post = create_post!(app, "alice", "hi");
    let base = format!("/api/posts/{}/comments", post.id);

    let resp = send!(
        app,
        TestRequest::post()
            .uri(&base)
            .set_json(json!({ "username": "bob", "content": "one" }))
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: CommentResponse = test::read_body_json(resp).await;
    assert_eq!(first.post_id, post.id);

    let resp = send!(
        app,
        TestRequest::post()
            .uri(&base)
            .set_json(json!({ "username": "carol", "content": "two" }))
    );
    let second: CommentResponse = test::read_body_json(resp).await;
    assert_eq!(fetch_post!(app, post.id).comments_count, 2);

    let resp = send!(app, TestRequest::get().uri(&base));
    let listed: Vec<CommentResponse> = test::read_body_json(resp).await;
    assert_eq!(listed, vec![first.clone(), second.clone()]);

    let resp = send!(
        app,
        TestRequest::patch()
            .uri(&format!("{}/{}", base, first.id))
            .set_json(json!({ "username": "bob", "content": "one, edited" }))
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let edited: CommentResponse = test::read_body_json(resp).await;
    assert_eq!(edited.content, "one, edited");

    let resp = send!(app, TestRequest::get().uri(&format!("{}/{}", base, first.id)));
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: CommentResponse = test::read_body_json(resp).await;
    assert_eq!(fetched, edited);

    let resp = send!(app, TestRequest::delete().uri(&format!("{}/{}", base, first.id)));
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(fetch_post!(app, post.id).comments_count, 1);

    let resp = send!(app, TestRequest::get().uri(&format!("{}/{}", base, first.id)));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message!(resp), "Comment not found");
}

#[actix_web::test]
async fn test_comment_under_wrong_post_is_not_found() {
    let app = app!(test_state().await);
    let owner = create_post!(app, "alice", "owner");
    let other = create_post!(app, "bob", "other");

    let resp = send!(
        app,
        TestRequest::post()
            .uri(&format!("/api/posts/{}/comments", owner.id))
            .set_json(json!({ "username": "carol", "content": "mine" }))
    );
    let comment: CommentResponse = test::read_body_json(resp).await;

    let resp = send!(
        app,
        TestRequest::patch()
            .uri(&format!("/api/posts/{}/comments/{}", other.id, comment.id))
            .set_json(json!({ "username": "mallory", "content": "stolen" }))
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message!(resp), "Comment not found");

    let resp = send!(
        app,
        TestRequest::get().uri(&format!("/api/posts/{}/comments/{}", owner.id, comment.id))
    );
    let unchanged: CommentResponse = test::read_body_json(resp).await;
    assert_eq!(unchanged.content, "mine");
}

#[actix_web::test]
async fn test_like_twice_then_unlike() {
    let app = app!(test_state().await);
    let post = create_post!(app, "alice", "hi");
    let uri = format!("/api/posts/{}/likes", post.id);

    let resp = send!(app, TestRequest::post().uri(&uri).set_json(json!({ "username": "bob" })));
    assert_eq!(resp.status(), StatusCode::CREATED);
    let like: LikeResponse = test::read_body_json(resp).await;
    assert_eq!((like.post_id, like.username.as_str()), (post.id, "bob"));

    let resp = send!(app, TestRequest::post().uri(&uri).set_json(json!({ "username": "bob" })));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message!(resp), "User already liked this post");
    assert_eq!(fetch_post!(app, post.id).likes_count, 1);

    let resp = send!(app, TestRequest::delete().uri(&uri).set_json(json!({ "username": "bob" })));
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(fetch_post!(app, post.id).likes_count, 0);

    let resp = send!(app, TestRequest::delete().uri(&uri).set_json(json!({ "username": "bob" })));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message!(resp), "Like not found");
}

#[actix_web::test]
async fn test_delete_post_cascades() {
    let app = app!(test_state().await);
    let post = create_post!(app, "alice", "hi");

    let resp = send!(
        app,
        TestRequest::post()
            .uri(&format!("/api/posts/{}/comments", post.id))
            .set_json(json!({ "username": "bob", "content": "yo" }))
    );
    let comment: CommentResponse = test::read_body_json(resp).await;
    send!(
        app,
        TestRequest::post()
            .uri(&format!("/api/posts/{}/likes", post.id))
            .set_json(json!({ "username": "bob" }))
    );

    let resp = send!(app, TestRequest::delete().uri(&format!("/api/posts/{}", post.id)));
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send!(app, TestRequest::get().uri(&format!("/api/posts/{}", post.id)));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = send!(
        app,
        TestRequest::get().uri(&format!("/api/posts/{}/comments/{}", post.id, comment.id))
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_root_and_health() {
    let app = app!(test_state().await);

    let resp = send!(app, TestRequest::get().uri("/"));
    assert_eq!(resp.status(), StatusCode::OK);
    let info: Value = test::read_body_json(resp).await;
    assert_eq!(info["status"], "running");
    assert_eq!(info["endpoints"]["posts"], "/api/posts");
    assert_eq!(info["endpoints"]["api-docs"], "/api-docs/openapi.json");
    assert_eq!(info["endpoints"]["swagger"], "/docs/");

    let resp = send!(app, TestRequest::get().uri("/api/health"));
    assert_eq!(resp.status(), StatusCode::OK);
    let health: Value = test::read_body_json(resp).await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["database"], "up");
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let app = app!(test_state().await);

    let resp = send!(app, TestRequest::get().uri("/api-docs/openapi.json"));
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = test::read_body_json(resp).await;
    assert_eq!(doc["info"]["title"], "Simple Social Media API");
    assert_eq!(doc["info"]["contact"]["email"], "support@contoso.com");
    assert!(doc["paths"]["/api/posts/{post_id}/likes"]["post"].is_object());
    assert!(doc["paths"]["/api/posts/{post_id}/likes"]["delete"].is_object());
    assert!(doc["components"]["schemas"]["PostResponse"]["properties"]["likesCount"].is_object());

    let resp = send!(app, TestRequest::get().uri("/docs/"));
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_cors_allows_any_origin() {
    let app = test::init_service(
        App::new()
            .wrap(cors_policy())
            .app_data(web::Data::new(test_state().await))
            .configure(configure_routes),
    )
    .await;

    let resp = send!(
        app,
        TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/posts")
            .insert_header(("Origin", "https://example.org"))
            .insert_header(("Access-Control-Request-Method", "PATCH"))
    );

    assert!(resp.status().is_success());
    assert!(
        resp.headers()
            .get("access-control-allow-origin")
            .is_some()
    );
}

struct UnreachableStore;

#[async_trait]
impl PostRepository for UnreachableStore {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Err(RepoError::Connection("pool timed out".to_string()))
    }

    async fn find_by_id(&self, _id: PostId) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Connection("pool timed out".to_string()))
    }

    async fn create(&self, _draft: ContentDraft) -> Result<Post, RepoError> {
        Err(RepoError::Query("database disk image is malformed".to_string()))
    }

    async fn update(&self, _id: PostId, _draft: ContentDraft) -> Result<Post, RepoError> {
        Err(RepoError::Query("database disk image is malformed".to_string()))
    }

    async fn delete(&self, _id: PostId) -> Result<(), RepoError> {
        Err(RepoError::Query("database disk image is malformed".to_string()))
    }
}

#[actix_web::test]
async fn test_storage_failure_is_internal_error() {
    let mut state = test_state().await;
    state.posts = Arc::new(UnreachableStore);
    let app = app!(state);

    let resp = send!(app, TestRequest::get().uri("/api/posts"));
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_message!(resp), "Internal server error");

    let resp = send!(
        app,
        TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "username": "alice", "content": "hi" }))
    );
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
