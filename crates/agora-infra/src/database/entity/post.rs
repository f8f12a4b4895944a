//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::{stored_count, stored_timestamp};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub username: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub created_at: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub updated_at: Option<String>,
    pub likes_count: i64,
    pub comments_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::like::Entity")]
    Like,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for agora_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            created_at: stored_timestamp(model.created_at.as_deref(), "posts.created_at"),
            updated_at: stored_timestamp(model.updated_at.as_deref(), "posts.updated_at"),
            username: model.username,
            content: model.content,
            likes_count: stored_count(model.likes_count),
            comments_count: stored_count(model.comments_count),
        }
    }
}
