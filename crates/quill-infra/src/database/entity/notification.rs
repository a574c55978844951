//! Notification entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::{AuthorSnapshot, NotificationKind};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub sender_id: Uuid,
    pub sender_first_name: String,
    pub sender_last_name: String,
    pub sender_picture: String,
    pub post_id: Option<Uuid>,
    pub kind: String,
    pub read: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Notification.
impl From<Model> for quill_core::domain::Notification {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            recipient_id: model.recipient_id,
            sender_id: model.sender_id,
            sender: AuthorSnapshot {
                first_name: model.sender_first_name,
                last_name: model.sender_last_name,
                picture: model.sender_picture,
            },
            post_id: model.post_id,
            // Kind strings are written exclusively by this service; anything
            // else is a corrupted row and degrades to the least actionable kind.
            kind: NotificationKind::parse(&model.kind).unwrap_or(NotificationKind::PostCreated),
            read: model.read,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from the domain Notification to a SeaORM ActiveModel.
impl From<quill_core::domain::Notification> for ActiveModel {
    fn from(notification: quill_core::domain::Notification) -> Self {
        Self {
            id: Set(notification.id),
            recipient_id: Set(notification.recipient_id),
            sender_id: Set(notification.sender_id),
            sender_first_name: Set(notification.sender.first_name),
            sender_last_name: Set(notification.sender.last_name),
            sender_picture: Set(notification.sender.picture),
            post_id: Set(notification.post_id),
            kind: Set(notification.kind.as_str().to_string()),
            read: Set(notification.read),
            created_at: Set(notification.created_at.into()),
        }
    }
}
