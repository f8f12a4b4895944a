//! HTTP handlers and route configuration.

mod comments;
mod docs;
mod health;
mod likes;
mod posts;
mod root;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/", web::get().to(root::service_info))
        .service(docs::swagger_ui())
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(posts::list_posts))
                        .route("", web::post().to(posts::create_post))
                        .route("/{post_id}", web::get().to(posts::get_post))
                        .route("/{post_id}", web::patch().to(posts::update_post))
                        .route("/{post_id}", web::delete().to(posts::delete_post))
                        .route("/{post_id}/comments", web::get().to(comments::list_comments))
                        .route("/{post_id}/comments", web::post().to(comments::create_comment))
                        .route(
                            "/{post_id}/comments/{comment_id}",
                            web::get().to(comments::get_comment),
                        )
                        .route(
                            "/{post_id}/comments/{comment_id}",
                            web::patch().to(comments::update_comment),
                        )
                        .route(
                            "/{post_id}/comments/{comment_id}",
                            web::delete().to(comments::delete_comment),
                        )
                        .route("/{post_id}/likes", web::post().to(likes::like_post))
                        .route("/{post_id}/likes", web::delete().to(likes::unlike_post)),
                ),
        );
}

#[cfg(test)]
mod tests;
