//! Migration CLI tool.
//!
//! `DATABASE_URL=sqlite://sns_api.db?mode=rwc migration status`

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    cli::run_cli(agora_infra::Migrator).await;
}
