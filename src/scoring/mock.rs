use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::client::CompletionClient;
use super::error::ScoringError;

const MOCK_MODEL: &str = "mock-scorer";

/// Scripted reply for one matching prompt.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    BackendError(String),
}

/// In-memory [`CompletionClient`] for tests.
///
/// Replies are keyed by a label that must appear on its own line in the prompt; the
/// first matching rule wins. Prompts with no matching rule get the default reply,
/// which scores every listed label with `default_score`.
pub struct MockCompletionClient {
    rules: Vec<(String, MockReply)>,
    delays: HashMap<String, Duration>,
    default_score: f64,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            delays: HashMap::new(),
            default_score: 0.5,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Score given to labels that no rule covers.
    pub fn with_default_score(mut self, score: f64) -> Self {
        self.default_score = score;
        self
    }

    /// Replies with `reply` verbatim when `label` is in the prompt.
    pub fn reply_when(mut self, label: impl Into<String>, reply: impl Into<String>) -> Self {
        self.rules
            .push((label.into(), MockReply::Text(reply.into())));
        self
    }

    /// Fails with [`ScoringError::Backend`] when `label` is in the prompt.
    pub fn fail_when(mut self, label: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules
            .push((label.into(), MockReply::BackendError(message.into())));
        self
    }

    /// Sleeps for `delay` before answering prompts that contain `label`.
    pub fn delay_when(mut self, label: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(label.into(), delay);
        self
    }

    /// Number of completed or failed calls.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    fn listed_labels(prompt: &str) -> Vec<&str> {
        prompt
            .split_once("Here are the words you need to rate:\n")
            .map(|(_, body)| body.lines().filter(|l| !l.is_empty()).collect())
            .unwrap_or_default()
    }

    fn default_reply(&self, labels: &[&str]) -> String {
        let records: Vec<serde_json::Value> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                serde_json::json!({
                    "word": label,
                    "confidence_score": self.default_score,
                    "id": (i + 1).to_string(),
                })
            })
            .collect();
        serde_json::Value::Array(records).to_string()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, ScoringError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let labels = Self::listed_labels(prompt);

        let delay = labels
            .iter()
            .filter_map(|l| self.delays.get(*l))
            .max()
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let rule = self
            .rules
            .iter()
            .find(|(label, _)| labels.contains(&label.as_str()))
            .map(|(_, reply)| reply.clone());

        self.calls.fetch_add(1, Ordering::SeqCst);

        match rule {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::BackendError(message)) => Err(ScoringError::Backend(message)),
            None => Ok(self.default_reply(&labels)),
        }
    }

    fn model(&self) -> &str {
        MOCK_MODEL
    }
}
