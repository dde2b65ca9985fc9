use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// The reply was not a JSON array of `{ word, confidence_score }` objects.
    #[error("malformed model response: {reason} (response starts with: {snippet:?})")]
    MalformedResponse { reason: String, snippet: String },

    /// The genai request itself failed (transport, auth, quota, ...).
    #[error("provider error: {0}")]
    Provider(#[from] genai::Error),

    /// A non-genai backend reported a failure.
    #[error("backend error: {0}")]
    Backend(String),

    /// The backend answered without any text content.
    #[error("model {model} returned no text content")]
    EmptyResponse { model: String },
}

impl ScoringError {
    const SNIPPET_CHARS: usize = 80;

    /// Builds a [`ScoringError::MalformedResponse`] with a bounded preview of `raw`.
    pub fn malformed(reason: impl Into<String>, raw: &str) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
            snippet: raw.chars().take(Self::SNIPPET_CHARS).collect(),
        }
    }

    /// Returns `true` for [`ScoringError::MalformedResponse`].
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}
