//! Object-store/CDN client.

use async_trait::async_trait;
use serde::Deserialize;

use quill_core::ports::{MediaError, MediaStore};

/// HTTP client for the external object store. Uploads the raw payload and
/// returns the stable URL the store assigns; the URL is never interpreted.
pub struct HttpMediaStore {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

impl HttpMediaStore {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl MediaStore for HttpMediaStore {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String, MediaError> {
        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| MediaError::Upload(e.to_string()))?
            .error_for_status()
            .map_err(|e| MediaError::Upload(e.to_string()))?;

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaError::Upload(e.to_string()))?;
        Ok(body.url)
    }
}
