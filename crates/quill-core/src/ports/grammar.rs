//! Grammar/style improvement port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single improvement: replace `original` with `replacement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub original: String,
    pub replacement: String,
}

/// External grammar/style service - returns suggested replacements for a
/// piece of text. Purely content assist, not part of the consistency core.
#[async_trait]
pub trait GrammarService: Send + Sync {
    async fn suggest(&self, text: &str) -> Result<Vec<Suggestion>, GrammarError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("Grammar service failed: {0}")]
    Service(String),
}

/// Apply each suggestion's first replacement by literal substring match,
/// first occurrence only. Fragments that no longer occur are skipped.
pub fn apply_suggestions(text: &str, suggestions: &[Suggestion]) -> String {
    let mut out = text.to_string();
    for s in suggestions {
        if s.original.is_empty() {
            continue;
        }
        out = out.replacen(&s.original, &s.replacement, 1);
    }
    out
}
