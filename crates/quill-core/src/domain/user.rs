use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - the source of truth for identity display fields.
///
/// `email` is the immutable identity key. `subscribers` holds the identities
/// of users following this one; it never contains duplicates or the user's
/// own id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// Unknown for accounts created through federated login.
    pub date_of_birth: Option<NaiveDate>,
    /// Object-store URL; empty until the user uploads an avatar.
    pub picture: String,
    pub bio: String,
    pub subscribers: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID, empty picture/bio and no subscribers.
    pub fn new(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        date_of_birth: Option<NaiveDate>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            date_of_birth,
            picture: String::new(),
            bio: String::new(),
            subscribers: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The display fields copied onto posts, comments and notifications.
    pub fn snapshot(&self) -> AuthorSnapshot {
        AuthorSnapshot {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            picture: self.picture.clone(),
        }
    }

    pub fn has_subscriber(&self, user_id: Uuid) -> bool {
        self.subscribers.contains(&user_id)
    }

    /// Add a subscriber. Returns false (and leaves the set untouched) for
    /// duplicates and for the user's own id.
    pub fn add_subscriber(&mut self, user_id: Uuid) -> bool {
        if user_id == self.id || self.has_subscriber(user_id) {
            return false;
        }
        self.subscribers.push(user_id);
        true
    }

    /// Remove a subscriber. Returns false if it was not present.
    pub fn remove_subscriber(&mut self, user_id: Uuid) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|id| *id != user_id);
        self.subscribers.len() != before
    }
}

/// Denormalized copy of a user's display fields, stored redundantly on
/// posts, comments and notifications for read-without-join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub picture: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(
            "ada@example.com".into(),
            "hash".into(),
            "Ada".into(),
            "Lovelace".into(),
            None,
        )
    }

    #[test]
    fn test_add_subscriber_rejects_self_and_duplicates() {
        let mut u = user();
        let other = Uuid::new_v4();

        assert!(!u.add_subscriber(u.id));
        assert!(u.add_subscriber(other));
        assert!(!u.add_subscriber(other));
        assert_eq!(u.subscribers.len(), 1);
    }

    #[test]
    fn test_remove_subscriber() {
        let mut u = user();
        let other = Uuid::new_v4();
        u.add_subscriber(other);

        assert!(u.remove_subscriber(other));
        assert!(!u.remove_subscriber(other));
        assert!(u.subscribers.is_empty());
    }

    #[test]
    fn test_snapshot_carries_display_fields() {
        let mut u = user();
        u.picture = "https://cdn.example.com/ada.png".into();

        let snap = u.snapshot();
        assert_eq!(snap.first_name, "Ada");
        assert_eq!(snap.last_name, "Lovelace");
        assert_eq!(snap.picture, "https://cdn.example.com/ada.png");
    }
}
