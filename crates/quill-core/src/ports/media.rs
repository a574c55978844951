//! Object-store/CDN port.

use async_trait::async_trait;

/// Object store accepting binary image payloads and returning a stable
/// retrievable URL. The URL is treated as an opaque string.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String, MediaError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Upload failed: {0}")]
    Upload(String),
}
