use std::collections::BTreeMap;

use actix_web::HttpResponse;

use agora_shared::dto::ServiceInfo;

use super::docs::{OPENAPI_JSON, SWAGGER_UI};

#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses((status = 200, description = "Service descriptor", body = ServiceInfo))
)]
pub async fn service_info() -> HttpResponse {
    let endpoints = BTreeMap::from([
        ("posts".to_string(), "/api/posts".to_string()),
        ("health".to_string(), "/api/health".to_string()),
        ("swagger".to_string(), SWAGGER_UI.to_string()),
        ("api-docs".to_string(), OPENAPI_JSON.to_string()),
    ]);

    HttpResponse::Ok().json(ServiceInfo {
        application: "Social Media API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        endpoints,
    })
}
