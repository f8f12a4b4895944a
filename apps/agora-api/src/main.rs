//! # Agora API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use agora_infra::DatabasePool;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let telemetry = TelemetryConfig::from_env();
    telemetry::init_telemetry(&telemetry);

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting {} on {}:{}",
        telemetry.service_name,
        config.host,
        config.port
    );

    let db = DatabasePool::init(&config.database).await.map_err(|e| {
        tracing::error!("Failed to initialize database: {}", e);
        std::io::Error::other(e)
    })?;
    let state = AppState::new(db);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::cors::cors_policy())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
