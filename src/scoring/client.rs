//! Completion backends: prompt in, raw model text out.

use async_trait::async_trait;
use genai::chat::{ChatMessage, ChatRequest};
use genai::resolver::{AuthData, AuthResolver};
use genai::{Client, ModelIden};
use tracing::debug;

use super::error::ScoringError;

#[async_trait]
/// Text completion backend used to score a chunk.
pub trait CompletionClient: Send + Sync {
    /// Sends `prompt` and returns the model's raw text reply.
    async fn complete(&self, prompt: &str) -> Result<String, ScoringError>;

    /// Model name, for logging.
    fn model(&self) -> &str;
}

/// [`CompletionClient`] backed by [`genai::Client`] with an explicit API key.
#[derive(Clone)]
pub struct GenaiCompletionClient {
    client: Client,
    model: String,
}

impl std::fmt::Debug for GenaiCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiCompletionClient")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GenaiCompletionClient {
    /// Creates a client for `model` that authenticates with `api_key`.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let auth_resolver = AuthResolver::from_resolver_fn(
            move |_model_iden: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
                Ok(Some(AuthData::from_single(api_key.clone())))
            },
        );

        let client = Client::builder().with_auth_resolver(auth_resolver).build();

        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl CompletionClient for GenaiCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, ScoringError> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending scoring request");

        let response = self.client.exec_chat(&self.model, request, None).await?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| ScoringError::EmptyResponse {
                model: self.model.clone(),
            })
    }

    fn model(&self) -> &str {
        &self.model
    }
}
