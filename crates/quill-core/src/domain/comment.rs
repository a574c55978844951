use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthorSnapshot;

/// Comment entity - bound to its parent post's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub author: AuthorSnapshot,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: Uuid, author_id: Uuid, author: AuthorSnapshot, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            author,
            content,
            created_at: Utc::now(),
        }
    }
}
