//! Grammar/style improvement service client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use quill_core::ports::{GrammarError, GrammarService, Suggestion};

/// HTTP client for the external grammar service.
pub struct HttpGrammarClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SuggestRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    suggestions: Vec<WireSuggestion>,
}

#[derive(Debug, Deserialize)]
struct WireSuggestion {
    original: String,
    replacement: String,
}

impl HttpGrammarClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl GrammarService for HttpGrammarClient {
    async fn suggest(&self, text: &str) -> Result<Vec<Suggestion>, GrammarError> {
        let response = self
            .client
            .post(format!("{}/suggest", self.base_url))
            .json(&SuggestRequest { text })
            .send()
            .await
            .map_err(|e| GrammarError::Service(e.to_string()))?
            .error_for_status()
            .map_err(|e| GrammarError::Service(e.to_string()))?;

        let body: SuggestResponse = response
            .json()
            .await
            .map_err(|e| GrammarError::Service(e.to_string()))?;

        Ok(body
            .suggestions
            .into_iter()
            .map(|s| Suggestion {
                original: s.original,
                replacement: s.replacement,
            })
            .collect())
    }
}

/// Fallback used when no grammar service is configured: no suggestions.
pub struct NoopGrammarClient;

#[async_trait]
impl GrammarService for NoopGrammarClient {
    async fn suggest(&self, _text: &str) -> Result<Vec<Suggestion>, GrammarError> {
        Ok(Vec::new())
    }
}
