//! Posts, comments, likes, and the notification fan-out they trigger.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Comment, Notification, NotificationKind, Post, User};
use crate::error::DomainError;
use crate::markup;
use crate::ports::{CommentRepository, NotificationRepository, PostRepository, UserRepository};

#[derive(Clone)]
pub struct ContentService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl ContentService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            users,
            posts,
            comments,
            notifications,
        }
    }

    /// Persist a post with the author snapshot taken at call time, then
    /// fan one `post_created` notification out to each subscriber.
    /// Fan-out failures are logged and never roll back the post.
    pub async fn create_post(
        &self,
        author_id: Uuid,
        title: String,
        raw_content: &str,
        image: Option<String>,
    ) -> Result<Post, DomainError> {
        let author = self
            .users
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", author_id))?;

        let post = Post::new(
            author_id,
            title,
            markup::render(raw_content),
            author.snapshot(),
            image,
        );
        let post = self.posts.save(post).await?;

        self.fan_out_to_subscribers(&author, post.id).await;
        Ok(post)
    }

    async fn fan_out_to_subscribers(&self, author: &User, post_id: Uuid) {
        for subscriber_id in &author.subscribers {
            let notification = Notification::new(
                NotificationKind::PostCreated,
                *subscriber_id,
                author.id,
                author.snapshot(),
                Some(post_id),
            );
            if let Err(e) = self.notifications.save(notification).await {
                tracing::warn!(
                    author_id = %author.id,
                    recipient_id = %subscriber_id,
                    error = %e,
                    "post_created fan-out emit failed"
                );
            }
        }
    }

    /// Edit an owned post. Content is re-rendered from raw markup.
    pub async fn edit_post(
        &self,
        author_id: Uuid,
        post_id: Uuid,
        title: Option<String>,
        raw_content: Option<&str>,
        image: Option<String>,
    ) -> Result<Post, DomainError> {
        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("post", post_id))?;
        if post.author_id != author_id {
            return Err(DomainError::Unauthorized);
        }

        if let Some(title) = title {
            post.title = title;
        }
        if let Some(raw) = raw_content {
            post.content = markup::render(raw);
        }
        if let Some(image) = image {
            post.image = Some(image);
        }
        post.updated_at = Utc::now();
        Ok(self.posts.save(post).await?)
    }

    /// Delete an owned post along with its comments - a comment must not
    /// outlive its parent post.
    pub async fn delete_post(&self, author_id: Uuid, post_id: Uuid) -> Result<(), DomainError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("post", post_id))?;
        if post.author_id != author_id {
            return Err(DomainError::Unauthorized);
        }

        self.comments.delete_by_post(post_id).await?;
        Ok(self.posts.delete(post_id).await?)
    }

    pub async fn get_post(&self, post_id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("post", post_id))
    }

    pub async fn list_posts_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_by_author(author_id).await?)
    }

    /// Flip the like state. A first like by someone other than the author
    /// emits one `like` notification; removal never retracts it.
    pub async fn toggle_like(&self, user_id: Uuid, post_id: Uuid) -> Result<Post, DomainError> {
        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("post", post_id))?;

        let liked = post.toggle_like(user_id);
        let post = self.posts.save(post).await?;

        if liked && user_id != post.author_id {
            self.notify_post_author(NotificationKind::Like, user_id, &post)
                .await;
        }
        Ok(post)
    }

    /// Add a comment carrying the author snapshot taken at call time. The
    /// post author is notified unless they wrote the comment themselves.
    pub async fn add_comment(
        &self,
        author_id: Uuid,
        post_id: Uuid,
        content: String,
    ) -> Result<Comment, DomainError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("post", post_id))?;
        let author = self
            .users
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", author_id))?;

        let comment = Comment::new(post_id, author_id, author.snapshot(), content);
        let comment = self.comments.save(comment).await?;

        if author_id != post.author_id {
            self.notify_post_author(NotificationKind::Comment, author_id, &post)
                .await;
        }
        Ok(comment)
    }

    pub async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        Ok(self.comments.find_by_post(post_id).await?)
    }

    /// Delete an owned comment.
    pub async fn delete_comment(
        &self,
        author_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), DomainError> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| DomainError::not_found("comment", comment_id))?;
        if comment.author_id != author_id {
            return Err(DomainError::Unauthorized);
        }
        Ok(self.comments.delete(comment_id).await?)
    }

    async fn notify_post_author(&self, kind: NotificationKind, acting_user_id: Uuid, post: &Post) {
        let actor = match self.users.find_by_id(acting_user_id).await {
            Ok(Some(actor)) => actor,
            Ok(None) => {
                tracing::warn!(%acting_user_id, "actor vanished before notify; skipping notification");
                return;
            }
            Err(e) => {
                tracing::warn!(%acting_user_id, error = %e, "could not load actor for notify; skipping notification");
                return;
            }
        };

        let notification = Notification::new(
            kind,
            post.author_id,
            acting_user_id,
            actor.snapshot(),
            Some(post.id),
        );
        if let Err(e) = self.notifications.save(notification).await {
            tracing::warn!(
                recipient_id = %post.author_id,
                kind = kind.as_str(),
                error = %e,
                "notification emit failed"
            );
        }
    }
}
