//! Account lifecycle: registration, authentication, profile edits and the
//! deletion cascade.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::{
    CommentRepository, FederatedProfile, NotificationRepository, PasswordService, PostRepository,
    UserRepository,
};
use crate::service::ConsistencyPropagator;

/// Requested profile field changes. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub picture: Option<String>,
    pub password_change: Option<PasswordChange>,
}

/// A password change must prove knowledge of the current secret.
#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
}

/// Identity store operations plus the account deletion cascade.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    notifications: Arc<dyn NotificationRepository>,
    passwords: Arc<dyn PasswordService>,
    propagator: ConsistencyPropagator,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        notifications: Arc<dyn NotificationRepository>,
        passwords: Arc<dyn PasswordService>,
        propagator: ConsistencyPropagator,
    ) -> Self {
        Self {
            users,
            posts,
            comments,
            notifications,
            passwords,
            propagator,
        }
    }

    /// Register a new user. The email is the immutable identity key;
    /// a duplicate registration is a conflict.
    pub async fn register(
        &self,
        email: String,
        password: &str,
        first_name: String,
        last_name: String,
        date_of_birth: NaiveDate,
    ) -> Result<User, DomainError> {
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(DomainError::Duplicate(format!(
                "email {email} already registered"
            )));
        }

        let hash = self
            .passwords
            .hash(password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        let user = User::new(email, hash, first_name, last_name, Some(date_of_birth));
        Ok(self.users.save(user).await?)
    }

    /// Verify credentials and return the user for assertion minting.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::NotFoundByKey(format!("no account for {email}")))?;

        // Accounts created through federation carry no usable secret; a
        // hash that fails to parse counts as a mismatch.
        let valid = self
            .passwords
            .verify(password, &user.password_hash)
            .unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized);
        }
        Ok(user)
    }

    /// Apply profile field changes atomically, then propagate the snapshot
    /// when a displayed-name field or the picture changed.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, DomainError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", user_id))?;

        if let Some(change) = &update.password_change {
            let valid = self
                .passwords
                .verify(&change.current, &user.password_hash)
                .unwrap_or(false);
            if !valid {
                return Err(DomainError::Unauthorized);
            }
            user.password_hash = self
                .passwords
                .hash(&change.new)
                .map_err(|e| DomainError::Internal(e.to_string()))?;
        }

        let mut snapshot_changed = false;
        if let Some(first_name) = update.first_name {
            snapshot_changed |= first_name != user.first_name;
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            snapshot_changed |= last_name != user.last_name;
            user.last_name = last_name;
        }
        if let Some(picture) = update.picture {
            snapshot_changed |= picture != user.picture;
            user.picture = picture;
        }
        if let Some(bio) = update.bio {
            user.bio = bio;
        }
        user.updated_at = Utc::now();

        let user = self.users.save(user).await?;
        if snapshot_changed {
            self.propagator.propagate(user.id, &user.snapshot()).await;
        }
        Ok(user)
    }

    /// Update the picture field and propagate unconditionally - the picture
    /// is part of every denormalized snapshot.
    pub async fn set_picture(&self, user_id: Uuid, picture: String) -> Result<User, DomainError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", user_id))?;

        user.picture = picture;
        user.updated_at = Utc::now();
        let user = self.users.save(user).await?;
        self.propagator.propagate(user.id, &user.snapshot()).await;
        Ok(user)
    }

    /// Create or refresh a local account from a federation-verified profile.
    /// A changed verified name or picture propagates like a profile edit.
    pub async fn federated_login(&self, profile: FederatedProfile) -> Result<User, DomainError> {
        match self.users.find_by_email(&profile.email).await? {
            Some(mut user) => {
                let picture_changed =
                    !profile.picture.is_empty() && profile.picture != user.picture;
                let name_changed = profile.first_name != user.first_name
                    || profile.last_name != user.last_name;
                if !name_changed && !picture_changed {
                    return Ok(user);
                }

                user.first_name = profile.first_name;
                user.last_name = profile.last_name;
                if picture_changed {
                    user.picture = profile.picture;
                }
                user.updated_at = Utc::now();
                let user = self.users.save(user).await?;
                self.propagator.propagate(user.id, &user.snapshot()).await;
                Ok(user)
            }
            None => {
                // No local secret: the empty hash never verifies, so the
                // account stays federation-only until a password is set.
                let mut user = User::new(
                    profile.email,
                    String::new(),
                    profile.first_name,
                    profile.last_name,
                    None,
                );
                user.picture = profile.picture;
                Ok(self.users.save(user).await?)
            }
        }
    }

    /// Delete an account and everything it owns, in dependency-safe order:
    /// comments under the user's posts, those posts, the user's comments
    /// elsewhere, notifications on either side, subscriber-list entries,
    /// and finally the identity record.
    ///
    /// The stores span independent collections with no multi-document
    /// transaction, so every step except the last is best-effort: a failure
    /// is logged and the remaining steps still run. Only a failure to
    /// remove the identity record itself is surfaced.
    pub async fn delete_account(&self, user_id: Uuid) -> Result<(), DomainError> {
        let owned_posts = match self.posts.find_by_author(user_id).await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "could not list posts for cascade; their comments may survive");
                Vec::new()
            }
        };

        for post in &owned_posts {
            if let Err(e) = self.comments.delete_by_post(post.id).await {
                tracing::warn!(%user_id, post_id = %post.id, error = %e, "cascade: deleting comments under post failed");
            }
        }

        if let Err(e) = self.posts.delete_by_author(user_id).await {
            tracing::warn!(%user_id, error = %e, "cascade: deleting posts failed");
        }

        if let Err(e) = self.comments.delete_by_author(user_id).await {
            tracing::warn!(%user_id, error = %e, "cascade: deleting authored comments failed");
        }

        if let Err(e) = self.notifications.delete_for_user(user_id).await {
            tracing::warn!(%user_id, error = %e, "cascade: deleting notifications failed");
        }

        if let Err(e) = self.users.remove_subscriber_from_all(user_id).await {
            tracing::warn!(%user_id, error = %e, "cascade: scrubbing subscriber lists failed");
        }

        self.users.delete(user_id).await.map_err(|e| match e {
            crate::error::RepoError::NotFound => DomainError::not_found("user", user_id),
            other => DomainError::Internal(other.to_string()),
        })
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", user_id))
    }
}
