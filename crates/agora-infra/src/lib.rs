//! # Agora Infrastructure
//!
//! Concrete implementations of the ports defined in `agora-core`:
//! the SQLite schema, its SeaORM entities, and the repositories built on them.

pub mod database;

pub use database::{
    DatabaseConfig, DatabasePool, Migrator, SqliteCommentRepository, SqliteLikeRepository,
    SqlitePostRepository,
};
