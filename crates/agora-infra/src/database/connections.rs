use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};
use sea_orm_migration::prelude::MigratorTrait;

use super::Migrator;

/// Configuration for the SQLite store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// e.g. `sqlite://sns_api.db?mode=rwc` or `sqlite::memory:`.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Connection pool over the social store.
///
/// Handlers never hold a connection between requests: every repository call
/// checks one out of the pool (or opens a transaction on it) and returns it
/// when the call completes, whatever the outcome.
#[derive(Clone)]
pub struct DatabasePool {
    pub main: DbConn,
}

impl DatabasePool {
    /// Connect and bring the schema up to date.
    ///
    /// Safe on every start: applied migrations are skipped and tables that
    /// already exist are left untouched.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Migrator::up(&main, None).await?;
        tracing::info!("Database schema is up to date");

        Ok(Self { main })
    }

    /// Round-trip to the store; used by the health check.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }
}
