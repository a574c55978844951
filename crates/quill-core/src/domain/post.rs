use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthorSnapshot;

/// Post entity - a blog post owned by its author.
///
/// `content` holds the structural markup produced at write time; the raw
/// marker input is discarded. `author` is the denormalized snapshot taken
/// at write/last-propagation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub author: AuthorSnapshot,
    /// Identities of users who liked the post; no duplicates.
    pub likes: Vec<Uuid>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        author_id: Uuid,
        title: String,
        content: String,
        author: AuthorSnapshot,
        image: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            content,
            author,
            likes: Vec::new(),
            image,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn liked_by(&self, user_id: Uuid) -> bool {
        self.likes.contains(&user_id)
    }

    /// Flip the like state for `user_id`. Returns true when the post is
    /// liked after the call.
    pub fn toggle_like(&mut self, user_id: Uuid) -> bool {
        if self.liked_by(user_id) {
            self.likes.retain(|id| *id != user_id);
            false
        } else {
            self.likes.push(user_id);
            true
        }
    }
}
