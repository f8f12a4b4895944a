//! Schema migrations for the social store.

use sea_orm_migration::prelude::*;

mod m20250601_000001_create_posts_table;
mod m20250601_000002_create_comments_table;
mod m20250601_000003_create_likes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_posts_table::Migration),
            Box::new(m20250601_000002_create_comments_table::Migration),
            Box::new(m20250601_000003_create_likes_table::Migration),
        ]
    }
}
