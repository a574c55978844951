//! Comment entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::AuthorSnapshot;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub author_first_name: String,
    pub author_last_name: String,
    pub author_picture: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Comment.
impl From<Model> for quill_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            author_id: model.author_id,
            author: AuthorSnapshot {
                first_name: model.author_first_name,
                last_name: model.author_last_name,
                picture: model.author_picture,
            },
            content: model.content,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from the domain Comment to a SeaORM ActiveModel.
impl From<quill_core::domain::Comment> for ActiveModel {
    fn from(comment: quill_core::domain::Comment) -> Self {
        Self {
            id: Set(comment.id),
            post_id: Set(comment.post_id),
            author_id: Set(comment.author_id),
            author_first_name: Set(comment.author.first_name),
            author_last_name: Set(comment.author.last_name),
            author_picture: Set(comment.author.picture),
            content: Set(comment.content),
            created_at: Set(comment.created_at.into()),
        }
    }
}
