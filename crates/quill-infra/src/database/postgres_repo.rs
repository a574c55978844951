//! PostgreSQL repository implementations.
//!
//! The snapshot rewrites and cascade deletions are bulk statements so a
//! propagation or cascade step is one round trip per store.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use quill_core::domain::{AuthorSnapshot, Comment, Notification, Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{
    CommentRepository, NotificationRepository, PostRepository, UserRepository,
};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::notification::{self, Entity as NotificationEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL notification repository.
pub type PostgresNotificationRepository = PostgresBaseRepository<NotificationEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn remove_subscriber_from_all(&self, user_id: Uuid) -> Result<u64, RepoError> {
        // JSONB membership has no portable filter here; scan and rewrite
        // the few rows whose set actually contains the id.
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let mut touched = 0;
        for model in models {
            let mut domain_user: User = model.clone().into();
            if !domain_user.remove_subscriber(user_id) {
                continue;
            }

            let mut active = model.into_active_model();
            active.subscribers = Set(serde_json::to_value(&domain_user.subscribers)
                .unwrap_or(serde_json::Value::Array(Vec::new())));
            active
                .update(&self.db)
                .await
                .map_err(|e| RepoError::Query(e.to_string()))?;
            touched += 1;
        }
        Ok(touched)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_author_snapshot(
        &self,
        author_id: Uuid,
        snapshot: &AuthorSnapshot,
    ) -> Result<u64, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(
                post::Column::AuthorFirstName,
                Expr::value(snapshot.first_name.clone()),
            )
            .col_expr(
                post::Column::AuthorLastName,
                Expr::value(snapshot.last_name.clone()),
            )
            .col_expr(
                post::Column::AuthorPicture,
                Expr::value(snapshot.picture.clone()),
            )
            .filter(post::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn delete_by_author(&self, author_id: Uuid) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_author_snapshot(
        &self,
        author_id: Uuid,
        snapshot: &AuthorSnapshot,
    ) -> Result<u64, RepoError> {
        let result = CommentEntity::update_many()
            .col_expr(
                comment::Column::AuthorFirstName,
                Expr::value(snapshot.first_name.clone()),
            )
            .col_expr(
                comment::Column::AuthorLastName,
                Expr::value(snapshot.last_name.clone()),
            )
            .col_expr(
                comment::Column::AuthorPicture,
                Expr::value(snapshot.picture.clone()),
            )
            .filter(comment::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn delete_by_post(&self, post_id: Uuid) -> Result<u64, RepoError> {
        let result = CommentEntity::delete_many()
            .filter(comment::Column::PostId.eq(post_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn delete_by_author(&self, author_id: Uuid) -> Result<u64, RepoError> {
        let result = CommentEntity::delete_many()
            .filter(comment::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn find_by_recipient(&self, recipient_id: Uuid) -> Result<Vec<Notification>, RepoError> {
        let result = NotificationEntity::find()
            .filter(notification::Column::RecipientId.eq(recipient_id))
            .order_by_desc(notification::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_sender_snapshot(
        &self,
        sender_id: Uuid,
        snapshot: &AuthorSnapshot,
    ) -> Result<u64, RepoError> {
        let result = NotificationEntity::update_many()
            .col_expr(
                notification::Column::SenderFirstName,
                Expr::value(snapshot.first_name.clone()),
            )
            .col_expr(
                notification::Column::SenderLastName,
                Expr::value(snapshot.last_name.clone()),
            )
            .col_expr(
                notification::Column::SenderPicture,
                Expr::value(snapshot.picture.clone()),
            )
            .filter(notification::Column::SenderId.eq(sender_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn delete_for_user(&self, user_id: Uuid) -> Result<u64, RepoError> {
        let result = NotificationEntity::delete_many()
            .filter(
                Condition::any()
                    .add(notification::Column::SenderId.eq(user_id))
                    .add(notification::Column::RecipientId.eq(user_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn mark_all_read(&self, recipient_id: Uuid) -> Result<u64, RepoError> {
        let result = NotificationEntity::update_many()
            .col_expr(notification::Column::Read, Expr::value(true))
            .filter(
                Condition::all()
                    .add(notification::Column::RecipientId.eq(recipient_id))
                    .add(notification::Column::Read.eq(false)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
