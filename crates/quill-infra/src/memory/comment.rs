use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{AuthorSnapshot, Comment};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, CommentRepository};

/// In-memory content store for comments.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    store: RwLock<HashMap<Uuid, Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Comment, Uuid> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, entity: Comment) -> Result<Comment, RepoError> {
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
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let mut comments: Vec<Comment> = self
            .store
            .read()
            .await
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.created_at);
        Ok(comments)
    }

    async fn update_author_snapshot(
        &self,
        author_id: Uuid,
        snapshot: &AuthorSnapshot,
    ) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let mut touched = 0;
        for comment in store.values_mut().filter(|c| c.author_id == author_id) {
            comment.author = snapshot.clone();
            touched += 1;
        }
        Ok(touched)
    }

    async fn delete_by_post(&self, post_id: Uuid) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|_, c| c.post_id != post_id);
        Ok((before - store.len()) as u64)
    }

    async fn delete_by_author(&self, author_id: Uuid) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|_, c| c.author_id != author_id);
        Ok((before - store.len()) as u64)
    }
}
