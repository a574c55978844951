//! Subscription toggling and its notification side effect.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Notification, NotificationKind};
use crate::error::DomainError;
use crate::ports::{NotificationRepository, UserRepository};

/// Result of a toggle: the caller's new membership state and the target's
/// resulting subscriber count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionState {
    pub subscribed: bool,
    pub subscriber_count: usize,
}

#[derive(Clone)]
pub struct SubscriptionService {
    users: Arc<dyn UserRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl SubscriptionService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            users,
            notifications,
        }
    }

    /// Strict toggle: present means remove, absent means add. Adding emits
    /// one `subscribe` notification to the target carrying the acting
    /// user's current snapshot; the emit is non-fatal.
    pub async fn toggle(
        &self,
        acting_user_id: Uuid,
        target_user_id: Uuid,
    ) -> Result<SubscriptionState, DomainError> {
        if acting_user_id == target_user_id {
            return Err(DomainError::Validation(
                "cannot subscribe to yourself".into(),
            ));
        }

        let mut target = self
            .users
            .find_by_id(target_user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", target_user_id))?;

        let subscribed = if target.has_subscriber(acting_user_id) {
            target.remove_subscriber(acting_user_id);
            false
        } else {
            target.add_subscriber(acting_user_id);
            true
        };

        let target = self.users.save(target).await?;

        if subscribed {
            self.notify_target(acting_user_id, target_user_id).await;
        }

        Ok(SubscriptionState {
            subscribed,
            subscriber_count: target.subscribers.len(),
        })
    }

    async fn notify_target(&self, acting_user_id: Uuid, target_user_id: Uuid) {
        let actor = match self.users.find_by_id(acting_user_id).await {
            Ok(Some(actor)) => actor,
            Ok(None) => {
                tracing::warn!(%acting_user_id, "subscriber vanished before notify; skipping notification");
                return;
            }
            Err(e) => {
                tracing::warn!(%acting_user_id, error = %e, "could not load subscriber for notify; skipping notification");
                return;
            }
        };

        let notification = Notification::new(
            NotificationKind::Subscribe,
            target_user_id,
            acting_user_id,
            actor.snapshot(),
            None,
        );
        if let Err(e) = self.notifications.save(notification).await {
            tracing::warn!(%target_user_id, error = %e, "subscribe notification emit failed");
        }
    }
}
