use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AuthorSnapshot, Comment, Notification, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Identity store - source of truth for display fields and subscriber sets.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Remove `user_id` from every other user's subscriber set.
    /// Returns the number of users whose set changed.
    async fn remove_subscriber_from_all(&self, user_id: Uuid) -> Result<u64, RepoError>;
}

/// Content store - posts with their denormalized author snapshots.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// Rewrite the author snapshot on every post authored by `author_id`.
    /// Returns the number of posts touched.
    async fn update_author_snapshot(
        &self,
        author_id: Uuid,
        snapshot: &AuthorSnapshot,
    ) -> Result<u64, RepoError>;

    async fn delete_by_author(&self, author_id: Uuid) -> Result<u64, RepoError>;
}

/// Content store - comments under posts.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    /// Rewrite the author snapshot on every comment authored by `author_id`.
    async fn update_author_snapshot(
        &self,
        author_id: Uuid,
        snapshot: &AuthorSnapshot,
    ) -> Result<u64, RepoError>;

    async fn delete_by_post(&self, post_id: Uuid) -> Result<u64, RepoError>;

    async fn delete_by_author(&self, author_id: Uuid) -> Result<u64, RepoError>;
}

/// Notification store.
#[async_trait]
pub trait NotificationRepository: BaseRepository<Notification, Uuid> {
    /// All notifications addressed to `recipient_id`, newest first.
    async fn find_by_recipient(&self, recipient_id: Uuid) -> Result<Vec<Notification>, RepoError>;

    /// Rewrite the sender snapshot on every notification sent by `sender_id`.
    async fn update_sender_snapshot(
        &self,
        sender_id: Uuid,
        snapshot: &AuthorSnapshot,
    ) -> Result<u64, RepoError>;

    /// Delete every notification where `user_id` is sender or recipient.
    async fn delete_for_user(&self, user_id: Uuid) -> Result<u64, RepoError>;

    /// Mark all of `recipient_id`'s notifications read.
    async fn mark_all_read(&self, recipient_id: Uuid) -> Result<u64, RepoError>;
}
