//! Post entity for SeaORM. The author snapshot is flattened into columns
//! so the propagation rewrite is a single bulk UPDATE.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::AuthorSnapshot;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author_first_name: String,
    pub author_last_name: String,
    pub author_picture: String,
    pub likes: Json,
    pub image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            content: model.content,
            author: AuthorSnapshot {
                first_name: model.author_first_name,
                last_name: model.author_last_name,
                picture: model.author_picture,
            },
            likes: serde_json::from_value(model.likes).unwrap_or_default(),
            image: model.image,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from the domain Post to a SeaORM ActiveModel.
impl From<quill_core::domain::Post> for ActiveModel {
    fn from(post: quill_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            author_id: Set(post.author_id),
            title: Set(post.title),
            content: Set(post.content),
            author_first_name: Set(post.author.first_name),
            author_last_name: Set(post.author.last_name),
            author_picture: Set(post.author.picture),
            likes: Set(serde_json::to_value(&post.likes).unwrap_or(Json::Array(Vec::new()))),
            image: Set(post.image),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
