//! Notification feed reads.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Notification;
use crate::error::DomainError;
use crate::ports::NotificationRepository;

/// A recipient's notifications plus their unread count.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Clone)]
pub struct NotificationService {
    notifications: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn list(&self, recipient_id: Uuid) -> Result<NotificationFeed, DomainError> {
        let notifications = self.notifications.find_by_recipient(recipient_id).await?;
        let unread_count = notifications.iter().filter(|n| !n.read).count();
        Ok(NotificationFeed {
            notifications,
            unread_count,
        })
    }

    /// Flip every unread notification to read. Returns the number touched.
    pub async fn mark_all_read(&self, recipient_id: Uuid) -> Result<u64, DomainError> {
        Ok(self.notifications.mark_all_read(recipient_id).await?)
    }
}
