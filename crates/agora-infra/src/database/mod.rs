//! Database connection management, schema and repositories.

mod accessors;
mod connections;
mod counters;
mod migrator;
mod sqlite_base;
mod sqlite_repo;

pub mod entity;

pub use accessors::{find_comment, find_post};
pub use connections::{DatabaseConfig, DatabasePool};
pub use counters::refresh_counts;
pub use migrator::Migrator;
pub use sqlite_repo::{SqliteCommentRepository, SqliteLikeRepository, SqlitePostRepository};
