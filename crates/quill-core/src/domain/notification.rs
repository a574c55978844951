use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthorSnapshot;

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Comment,
    Subscribe,
    PostCreated,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Comment => "comment",
            Self::Subscribe => "subscribe",
            Self::PostCreated => "post_created",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "like" => Some(Self::Like),
            "comment" => Some(Self::Comment),
            "subscribe" => Some(Self::Subscribe),
            "post_created" => Some(Self::PostCreated),
            _ => None,
        }
    }
}

/// Notification entity - created as a side effect of likes, comments,
/// subscriptions and post creation. Only the `read` flag is ever mutated;
/// removal happens solely through the account cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub sender_id: Uuid,
    pub sender: AuthorSnapshot,
    pub post_id: Option<Uuid>,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        recipient_id: Uuid,
        sender_id: Uuid,
        sender: AuthorSnapshot,
        post_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipient_id,
            sender_id,
            sender,
            post_id,
            kind,
            read: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_string_form() {
        assert_eq!(NotificationKind::PostCreated.as_str(), "post_created");
        assert_eq!(
            NotificationKind::parse("subscribe"),
            Some(NotificationKind::Subscribe)
        );
        assert_eq!(NotificationKind::parse("unknown"), None);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&NotificationKind::PostCreated).unwrap();
        assert_eq!(json, "\"post_created\"");
    }
}
