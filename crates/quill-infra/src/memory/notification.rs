use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{AuthorSnapshot, Notification};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, NotificationRepository};

/// In-memory notification store.
#[derive(Default)]
pub struct InMemoryNotificationRepository {
    store: RwLock<HashMap<Uuid, Notification>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Notification, Uuid> for InMemoryNotificationRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, entity: Notification) -> Result<Notification, RepoError> {
        self.store.write().await.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn find_by_recipient(&self, recipient_id: Uuid) -> Result<Vec<Notification>, RepoError> {
        let mut notifications: Vec<Notification> = self
            .store
            .read()
            .await
            .values()
            .filter(|n| n.recipient_id == recipient_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    async fn update_sender_snapshot(
        &self,
        sender_id: Uuid,
        snapshot: &AuthorSnapshot,
    ) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let mut touched = 0;
        for notification in store.values_mut().filter(|n| n.sender_id == sender_id) {
            notification.sender = snapshot.clone();
            touched += 1;
        }
        Ok(touched)
    }

    async fn delete_for_user(&self, user_id: Uuid) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|_, n| n.sender_id != user_id && n.recipient_id != user_id);
        Ok((before - store.len()) as u64)
    }

    async fn mark_all_read(&self, recipient_id: Uuid) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let mut touched = 0;
        for notification in store
            .values_mut()
            .filter(|n| n.recipient_id == recipient_id && !n.read)
        {
            notification.read = true;
            touched += 1;
        }
        Ok(touched)
    }
}
