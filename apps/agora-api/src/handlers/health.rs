//! Health check endpoint.

use actix_web::{HttpResponse, web};

use agora_core::time;
use agora_shared::dto::HealthResponse;

use crate::state::AppState;

/// Health check endpoint - returns server status.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "service",
    responses((status = 200, description = "Server and database status", body = HealthResponse))
)]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (status, database) = match state.db.ping().await {
        Ok(()) => ("ok", "up"),
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            ("degraded", "down")
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: time::canonical(&time::now()),
    })
}
