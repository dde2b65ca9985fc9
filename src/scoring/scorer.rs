use std::sync::Arc;

use tracing::{debug, warn};

use super::client::CompletionClient;
use super::error::ScoringError;
use super::parser::parse_response;
use super::prompt::build_prompt;
use super::types::ScoredChunkResult;
use crate::dispatch::ChunkScorer;

/// Scores one chunk: prompt → completion → parse.
pub struct LabelScorer<C: ?Sized> {
    client: Arc<C>,
}

impl<C: ?Sized> Clone for LabelScorer<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: CompletionClient + ?Sized> std::fmt::Debug for LabelScorer<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelScorer")
            .field("model", &self.client.model())
            .finish()
    }
}

impl<C: CompletionClient + ?Sized> LabelScorer<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn score_labels(&self, labels: &[String]) -> Result<ScoredChunkResult, ScoringError> {
        let prompt = build_prompt(labels);
        let raw = self.client.complete(&prompt).await?;
        let records = parse_response(&raw)?;

        if records.len() != labels.len() {
            warn!(
                expected = labels.len(),
                received = records.len(),
                model = self.client.model(),
                "Model returned a different number of records than labels sent"
            );
        } else {
            debug!(records = records.len(), "Chunk parsed");
        }

        Ok(records)
    }
}

impl<C: CompletionClient + ?Sized> ChunkScorer for LabelScorer<C> {
    async fn score(&self, chunk: &[String]) -> Result<ScoredChunkResult, ScoringError> {
        self.score_labels(chunk).await
    }
}
