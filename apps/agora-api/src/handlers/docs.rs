//! Generated OpenAPI document and the Swagger UI that renders it.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use agora_shared::ErrorResponse;
use agora_shared::dto::{
    CommentResponse, ContentRequest, HealthResponse, LikeRequest, LikeResponse, PostResponse,
    ServiceInfo,
};

use super::{comments, health, likes, posts, root};

pub const SWAGGER_UI: &str = "/docs/";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simple Social Media API",
        description = "A basic Social Networking Service (SNS) API that allows users to create, retrieve, update, and delete posts; add comments; and like/unlike posts.",
        contact(name = "Contoso Product Team", email = "support@contoso.com"),
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    paths(
        root::service_info,
        health::health_check,
        posts::list_posts,
        posts::create_post,
        posts::get_post,
        posts::update_post,
        posts::delete_post,
        comments::list_comments,
        comments::create_comment,
        comments::get_comment,
        comments::update_comment,
        comments::delete_comment,
        likes::like_post,
        likes::unlike_post,
    ),
    components(schemas(
        ContentRequest,
        LikeRequest,
        PostResponse,
        CommentResponse,
        LikeResponse,
        ErrorResponse,
        ServiceInfo,
        HealthResponse,
    )),
    tags(
        (name = "posts", description = "Create, read, update and delete posts"),
        (name = "comments", description = "Comments nested under a post"),
        (name = "likes", description = "Like and unlike a post"),
        (name = "service", description = "Service descriptor and health"),
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs/{_:.*}").url(OPENAPI_JSON, ApiDoc::openapi())
}
