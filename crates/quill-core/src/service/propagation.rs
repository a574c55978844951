//! Denormalized snapshot propagation.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::AuthorSnapshot;
use crate::ports::{CommentRepository, NotificationRepository, PostRepository};

/// Rewrites the denormalized author/sender snapshots on posts, comments and
/// notifications after an identity-snapshot-affecting mutation.
///
/// The rewrite is best-effort and non-transactional: the user record is
/// already committed when this runs, so a failed bulk update is logged and
/// left as stale display data. The next propagation heals it.
#[derive(Clone)]
pub struct ConsistencyPropagator {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl ConsistencyPropagator {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            notifications,
        }
    }

    /// Push `snapshot` onto every post, comment and sent notification of
    /// `user_id`. Never fails; each store is attempted independently.
    pub async fn propagate(&self, user_id: Uuid, snapshot: &AuthorSnapshot) {
        match self.posts.update_author_snapshot(user_id, snapshot).await {
            Ok(n) => tracing::debug!(%user_id, posts = n, "propagated snapshot to posts"),
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "post snapshot propagation failed; posts stay stale")
            }
        }

        match self.comments.update_author_snapshot(user_id, snapshot).await {
            Ok(n) => tracing::debug!(%user_id, comments = n, "propagated snapshot to comments"),
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "comment snapshot propagation failed; comments stay stale")
            }
        }

        match self
            .notifications
            .update_sender_snapshot(user_id, snapshot)
            .await
        {
            Ok(n) => {
                tracing::debug!(%user_id, notifications = n, "propagated snapshot to notifications")
            }
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "notification snapshot propagation failed; notifications stay stale")
            }
        }
    }
}
